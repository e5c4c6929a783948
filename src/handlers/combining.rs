//! Fan-out to several handlers

use crate::core::{close_handler, Closeable, Event, Handler, LoggerError, Result};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// How a combining handler reports sub-handler failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Return the result of the last sub-handler; earlier failures are dropped
    #[default]
    LastWins,
    /// Return every failure, wrapped in `LoggerError::Multiple` when more than one
    Collect,
}

/// Passes each event to every registered handler, in registration order
///
/// A failing or panicking handler never prevents the following ones from
/// running.
#[derive(Default)]
pub struct CombiningHandler {
    handlers: Vec<Box<dyn Handler>>,
    error_policy: ErrorPolicy,
}

impl CombiningHandler {
    pub fn new(handlers: Vec<Box<dyn Handler>>) -> Self {
        Self {
            handlers,
            error_policy: ErrorPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_handler(mut self, handler: impl Handler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn add_handler(&mut self, handler: Box<dyn Handler>) {
        self.handlers.push(handler);
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handlers(&self) -> &[Box<dyn Handler>] {
        &self.handlers
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Handler for CombiningHandler {
    fn handle(&mut self, event: &Event) -> Result<()> {
        let mut last = Ok(());
        let mut errors = Vec::new();

        // Per-handler panic isolation
        for (idx, handler) in self.handlers.iter_mut().enumerate() {
            let outcome = match catch_unwind(AssertUnwindSafe(|| handler.handle(event))) {
                Ok(result) => result,
                Err(panic_info) => {
                    let message = panic_message(&*panic_info);
                    eprintln!(
                        "[LOGGER CRITICAL] Handler #{} panicked: {}. \
                         Other handlers continue to function.",
                        idx, message
                    );
                    Err(LoggerError::handler_panicked(idx, message))
                }
            };

            match self.error_policy {
                ErrorPolicy::LastWins => last = outcome,
                ErrorPolicy::Collect => {
                    if let Err(e) = outcome {
                        errors.push(e);
                    }
                }
            }
        }

        match self.error_policy {
            ErrorPolicy::LastWins => last,
            ErrorPolicy::Collect if errors.len() > 1 => Err(LoggerError::Multiple(errors)),
            ErrorPolicy::Collect => errors.pop().map_or(Ok(()), Err),
        }
    }

    fn as_closeable(&mut self) -> Option<&mut dyn Closeable> {
        Some(self)
    }
}

impl Closeable for CombiningHandler {
    /// Close every sub-handler that supports it, in registration order
    fn close(&mut self) {
        for handler in &mut self.handlers {
            close_handler(handler);
        }
    }
}
