//! Output format selection and formatter configuration
//!
//! Provides the serializable configuration a host application uses to pick
//! a formatter:
//! - Simple: bare `<timestamp> <message>` lines
//! - Terminal: aligned, optionally colored, human-readable lines
//! - Json / JsonPretty: one JSON object per record
//! - Logfmt: `key=value` pairs compatible with log aggregation tools

use super::{JsonFormatter, LogfmtFormatter, SimpleFormatter, TerminalFormatter};
use crate::core::{Formatter, Theme, TimestampFormat};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format for log events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Example: `2025-01-08T10:30:45.000000000Z Request processed [main.rs:10]`
    Simple,

    /// Example: `INFO    Request processed [ts="..." lvl="INFO" msg="Request processed"]`
    #[default]
    Terminal,

    /// Example: `{"lvl":"INFO","msg":"Request processed","ts":"..."}`
    Json,

    /// Same as `Json`, indented with four spaces
    JsonPretty,

    /// Example: `ts=... lvl=INFO msg="Request processed"`
    Logfmt,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simple" => Ok(OutputFormat::Simple),
            "terminal" | "text" => Ok(OutputFormat::Terminal),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" | "json_pretty" => Ok(OutputFormat::JsonPretty),
            "logfmt" => Ok(OutputFormat::Logfmt),
            _ => Err(format!("Invalid output format: '{}'", s)),
        }
    }
}

/// When the terminal formatter should emit color escapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    /// Color only when the caller reports an interactive terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self, interactive: bool) -> bool {
        match self {
            ColorMode::Auto => interactive,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Configuration for building a formatter
///
/// Missing fields take their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use ligno::formatters::{FormatterConfig, OutputFormat};
///
/// let config: FormatterConfig =
///     serde_json::from_str(r#"{"format":"logfmt","timestamp_format":"UnixMillis"}"#).unwrap();
/// assert_eq!(config.format, OutputFormat::Logfmt);
/// let formatter = config.build(false);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatterConfig {
    pub format: OutputFormat,
    pub timestamp_format: TimestampFormat,
    pub colors: ColorMode,
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorMode) -> Self {
        self.colors = colors;
        self
    }

    /// Build the configured formatter
    ///
    /// `interactive` reports whether the destination is an interactive
    /// terminal; it only matters for `Terminal` with `ColorMode::Auto`.
    #[must_use]
    pub fn build(&self, interactive: bool) -> Box<dyn Formatter> {
        let ts = self.timestamp_format.clone();
        match self.format {
            OutputFormat::Simple => Box::new(SimpleFormatter::new().with_timestamp_format(ts)),
            OutputFormat::Terminal => {
                let theme = Theme::for_terminal(self.colors.use_colors(interactive));
                Box::new(TerminalFormatter::new(theme).with_timestamp_format(ts))
            }
            OutputFormat::Json => Box::new(JsonFormatter::compact().with_timestamp_format(ts)),
            OutputFormat::JsonPretty => {
                Box::new(JsonFormatter::pretty().with_timestamp_format(ts))
            }
            OutputFormat::Logfmt => Box::new(LogfmtFormatter::new().with_timestamp_format(ts)),
        }
    }
}
