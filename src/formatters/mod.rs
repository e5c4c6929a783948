//! Formatter implementations

pub mod encode;
mod fields;
pub mod json;
pub mod logfmt;
pub mod output_format;
pub mod simple;
pub mod terminal;

pub use encode::{encode_value, escape_string, format_float, needs_quote, PARSE_ERROR_KEY};
pub use json::JsonFormatter;
pub use logfmt::LogfmtFormatter;
pub use output_format::{ColorMode, FormatterConfig, OutputFormat};
pub use simple::SimpleFormatter;
pub use terminal::TerminalFormatter;

// Re-export trait for convenience
pub use crate::core::Formatter;
