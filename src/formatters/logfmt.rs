//! logfmt formatter

use super::encode::{encode_value, escape_string};
use super::fields::collect_fields;
use crate::core::{Event, Formatter, TimestampFormat};

/// Serializes the field list as space-separated `key=value` pairs on one line
///
/// Keys and values are individually escaped; see [`escape_string`].
#[derive(Debug, Clone, Default)]
pub struct LogfmtFormatter {
    timestamp_format: TimestampFormat,
}

impl LogfmtFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }
}

impl Formatter for LogfmtFormatter {
    fn format(&self, event: &Event) -> Vec<u8> {
        let mut out = String::new();
        for (idx, field) in collect_fields(event, true).iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            out.push_str(&escape_string(field.key));
            out.push('=');
            out.push_str(&encode_value(&field.value, &self.timestamp_format));
        }
        out.push('\n');
        out.into_bytes()
    }
}
