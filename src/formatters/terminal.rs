//! Human-oriented terminal formatter

use super::encode::needs_quote;
use super::fields::collect_fields;
use crate::core::{Event, Formatter, LogLevel, Theme, TimestampFormat, Value};

/// Renders a themed, aligned level label, the message, and a bracketed
/// `key="value"` list of `ts`, `lvl`, `msg` followed by context and pairs
///
/// Keys are quoted when empty or when they contain whitespace, quotes,
/// backslashes, `=` or non-printable characters. Values are always quoted
/// and rendered verbatim.
#[derive(Debug, Clone, Default)]
pub struct TerminalFormatter {
    theme: Theme,
    timestamp_format: TimestampFormat,
}

impl TerminalFormatter {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Colored output when `interactive`, plain otherwise
    pub fn for_terminal(interactive: bool) -> Self {
        Self::new(Theme::for_terminal(interactive))
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    fn render_value(&self, value: &Value) -> String {
        match value {
            Value::Time(t) => self.timestamp_format.format(t),
            other => other.to_string(),
        }
    }
}

impl Formatter for TerminalFormatter {
    fn format(&self, event: &Event) -> Vec<u8> {
        let label = event.level.to_str();
        let mut out = self.theme.paint(event.level, label);
        let padding = LogLevel::MAX_NAME_LEN - label.len() + 3;
        out.extend(std::iter::repeat(' ').take(padding));
        out.push_str(&event.message);

        let fields = collect_fields(event, false);
        if !fields.is_empty() {
            out.push_str(" [");
            for (idx, field) in fields.iter().enumerate() {
                if idx > 0 {
                    out.push(' ');
                }
                let quote_key = field.key.is_empty() || field.key.chars().any(needs_quote);
                if quote_key {
                    out.push('"');
                }
                out.push_str(field.key);
                if quote_key {
                    out.push('"');
                }
                out.push_str("=\"");
                out.push_str(&self.render_value(&field.value));
                out.push('"');
            }
            out.push(']');
        }

        out.push('\n');
        out.into_bytes()
    }
}
