//! # Ligno
//!
//! Encoding and delivery core of a structured logging library: turns a log
//! event into bytes and routes them through a composable chain of handlers.
//!
//! ## Features
//!
//! - **Four Formats**: simple lines, themed terminal output, JSON and logfmt
//!   from one shared event model
//! - **Composable Handlers**: stream, console, buffered, file, filter,
//!   combining, memory and null sinks
//! - **Never Fails to Format**: encoding problems degrade the output instead
//!   of erroring
//! - **Synchronous**: every write happens on the caller's thread
//!
//! ## Example
//!
//! ```
//! use ligno::prelude::*;
//!
//! let memory = MemoryHandler::new(LogfmtFormatter::new());
//! let mut chain = CombiningHandler::default()
//!     .with_handler(FilterHandler::level(LogLevel::Warn, NullHandler))
//!     .with_handler(memory.clone());
//!
//! let event = Event::new(LogLevel::Info, "cache warmed").with_pair("entries", 512);
//! chain.handle(&event).unwrap();
//! close_handler(&mut chain);
//!
//! assert!(memory.messages()[0].contains("entries=512"));
//! ```

pub mod core;
pub mod formatters;
pub mod handlers;

pub mod prelude {
    pub use crate::core::{
        close_handler, formatter_fn, CallSite, Closeable, Context, Event, Formatter, Handler,
        Inspectable, LogLevel, LoggerError, Result, Theme, TimestampFormat, Value,
    };
    pub use crate::formatters::{
        ColorMode, FormatterConfig, JsonFormatter, LogfmtFormatter, OutputFormat,
        SimpleFormatter, TerminalFormatter,
    };
    #[cfg(feature = "file")]
    pub use crate::handlers::FileHandler;
    pub use crate::handlers::{
        handler_fn, BufferedStreamHandler, CombiningHandler, ConsoleHandler, ErrorPolicy,
        FilterHandler, MemoryHandler, NullHandler, StreamHandler,
    };
}

pub use crate::core::{
    close_handler, formatter_fn, CallSite, Closeable, Context, Event, Formatter, Handler,
    Inspectable, LogLevel, LoggerError, Result, Theme, TimestampFormat, Value,
};
pub use crate::formatters::{
    ColorMode, FormatterConfig, JsonFormatter, LogfmtFormatter, OutputFormat, SimpleFormatter,
    TerminalFormatter,
};
#[cfg(feature = "file")]
pub use crate::handlers::FileHandler;
pub use crate::handlers::{
    handler_fn, BufferedStreamHandler, CombiningHandler, ConsoleHandler, ErrorPolicy,
    FilterHandler, MemoryHandler, NullHandler, StreamHandler,
};
