//! Console handler

use crate::core::{Closeable, Event, Formatter, Handler, LogLevel, Result};
use crate::formatters::TerminalFormatter;
use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

/// Writes events to the process console
///
/// `Error` and `Fatal` go to stderr, everything else to stdout. Uses the
/// terminal formatter unless another one is supplied.
pub struct ConsoleHandler {
    formatter: Arc<dyn Formatter>,
}

impl ConsoleHandler {
    /// Terminal output, colored when `interactive` is true
    pub fn new(interactive: bool) -> Self {
        Self::with_formatter(TerminalFormatter::for_terminal(interactive))
    }

    /// Terminal output, colored if stdout is a terminal right now
    pub fn detect() -> Self {
        Self::new(io::stdout().is_terminal())
    }

    pub fn with_formatter(formatter: impl Formatter + 'static) -> Self {
        Self {
            formatter: Arc::new(formatter),
        }
    }
}

impl Handler for ConsoleHandler {
    fn handle(&mut self, event: &Event) -> Result<()> {
        let record = self.formatter.format(event);

        // Route Error and Fatal levels to stderr, others to stdout
        match event.level {
            LogLevel::Error | LogLevel::Fatal => io::stderr().lock().write_all(&record)?,
            _ => io::stdout().lock().write_all(&record)?,
        }
        Ok(())
    }

    fn as_closeable(&mut self) -> Option<&mut dyn Closeable> {
        Some(self)
    }
}

impl Closeable for ConsoleHandler {
    fn close(&mut self) {
        // Flush both stdout and stderr since we write to both
        if let Err(e) = io::stdout().flush() {
            eprintln!("[LOGGER ERROR] Console handler failed to flush stdout: {}", e);
        }
        if let Err(e) = io::stderr().flush() {
            eprintln!("[LOGGER ERROR] Console handler failed to flush stderr: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::close_handler;
    use crate::handlers::MemoryHandler;

    #[test]
    fn test_console_handle_and_close() {
        let mut handler = ConsoleHandler::new(false);
        assert!(handler.handle(&Event::new(LogLevel::Debug, "to stdout")).is_ok());
        assert!(handler.handle(&Event::new(LogLevel::Error, "to stderr")).is_ok());
        assert!(close_handler(&mut handler));
    }

    #[test]
    fn test_custom_formatter() {
        // Formatter is shared through an Arc, so the same one can back a memory handler
        let formatter: Arc<dyn Formatter> = Arc::new(TerminalFormatter::for_terminal(false));
        let mut console = ConsoleHandler::with_formatter(Arc::clone(&formatter));
        let mut memory = MemoryHandler::new(formatter);

        let event = Event::new(LogLevel::Info, "mirrored");
        console.handle(&event).unwrap();
        memory.handle(&event).unwrap();
        assert!(memory.messages()[0].starts_with("INFO    mirrored"));
    }
}
