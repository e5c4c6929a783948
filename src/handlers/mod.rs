//! Handler implementations

pub mod buffered;
pub mod combining;
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod filter;
pub mod memory;
pub mod null;
pub mod stream;

pub use buffered::BufferedStreamHandler;
pub use combining::{CombiningHandler, ErrorPolicy};
pub use console::ConsoleHandler;
#[cfg(feature = "file")]
pub use file::FileHandler;
pub use filter::{FilterHandler, Predicate};
pub use memory::MemoryHandler;
pub use null::{handler_fn, HandlerFn, NullHandler};
pub use stream::StreamHandler;

// Re-export traits for convenience
pub use crate::core::{Closeable, Handler, Inspectable};
