//! Core data model and contracts

pub mod context;
pub mod error;
pub mod event;
pub mod formatter;
pub mod handler;
pub mod log_level;
pub mod theme;
pub mod timestamp;
pub mod value;

pub use context::Context;
pub use error::{LoggerError, Result};
pub use event::{CallSite, Event};
pub use formatter::{formatter_fn, Formatter, FormatterFn};
pub use handler::{close_handler, Closeable, Handler, Inspectable};
pub use log_level::LogLevel;
pub use theme::{Decorator, Theme};
pub use timestamp::TimestampFormat;
pub use value::Value;
