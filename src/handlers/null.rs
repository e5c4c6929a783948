//! Discarding handler and closure adapter

use crate::core::{Event, Handler, Result};

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHandler;

impl Handler for NullHandler {
    fn handle(&mut self, _event: &Event) -> Result<()> {
        Ok(())
    }
}

/// Handler backed by a closure
pub struct HandlerFn<F>(F);

/// Wrap a closure as a handler
///
/// # Example
///
/// ```
/// use ligno::core::{Event, Handler, LogLevel};
/// use ligno::handlers::handler_fn;
///
/// let mut count = 0;
/// {
///     let mut counting = handler_fn(|_: &Event| {
///         count += 1;
///         Ok(())
///     });
///     counting.handle(&Event::new(LogLevel::Info, "x")).unwrap();
/// }
/// assert_eq!(count, 1);
/// ```
pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: FnMut(&Event) -> Result<()> + Send,
{
    HandlerFn(f)
}

impl<F> Handler for HandlerFn<F>
where
    F: FnMut(&Event) -> Result<()> + Send,
{
    fn handle(&mut self, event: &Event) -> Result<()> {
        (self.0)(event)
    }
}
