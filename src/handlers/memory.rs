//! In-memory, inspectable handler

use crate::core::{Event, Formatter, Handler, Inspectable, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Stores every formatted record in memory for later inspection
///
/// Clones share the same buffer, so one clone can be installed in a chain
/// while another is queried, from any thread.
///
/// # Example
///
/// ```
/// use ligno::core::{Event, Handler, LogLevel};
/// use ligno::formatters::LogfmtFormatter;
/// use ligno::handlers::MemoryHandler;
///
/// let memory = MemoryHandler::new(LogfmtFormatter::new());
/// let mut installed = memory.clone();
/// installed.handle(&Event::new(LogLevel::Info, "hello")).unwrap();
/// assert!(memory.messages()[0].contains("msg=hello"));
/// ```
#[derive(Clone)]
pub struct MemoryHandler {
    buffer: Arc<Mutex<Vec<Vec<u8>>>>,
    formatter: Arc<dyn Formatter>,
}

impl MemoryHandler {
    pub fn new(formatter: impl Formatter + 'static) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
            formatter: Arc::new(formatter),
        }
    }

    /// Snapshot of all stored records, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.buffer
            .lock()
            .iter()
            .map(|record| String::from_utf8_lossy(record).into_owned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Handler for MemoryHandler {
    fn handle(&mut self, event: &Event) -> Result<()> {
        let record = self.formatter.format(event);
        self.buffer.lock().push(record);
        Ok(())
    }

    fn as_inspectable(&self) -> Option<&dyn Inspectable> {
        Some(self)
    }
}

impl Inspectable for MemoryHandler {
    fn messages(&self) -> Vec<String> {
        MemoryHandler::messages(self)
    }
}
