//! Predicate-gated handlers

use crate::core::{Closeable, Event, Handler, Inspectable, LogLevel, Result};

/// Decides whether an event reaches the wrapped handler
pub type Predicate = Box<dyn Fn(&Event) -> bool + Send>;

/// Passes an event to the inner handler only when the predicate accepts it
///
/// Rejected events count as handled successfully. Capabilities of the inner
/// handler are exposed unchanged.
pub struct FilterHandler<H> {
    predicate: Predicate,
    inner: H,
}

impl<H: Handler> FilterHandler<H> {
    pub fn new<P>(predicate: P, inner: H) -> Self
    where
        P: Fn(&Event) -> bool + Send + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            inner,
        }
    }

    /// Only events at `threshold` or more severe pass
    pub fn level(threshold: LogLevel, inner: H) -> Self {
        Self::new(move |event: &Event| event.level >= threshold, inner)
    }

    pub fn inner(&self) -> &H {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut H {
        &mut self.inner
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: Handler> Handler for FilterHandler<H> {
    fn handle(&mut self, event: &Event) -> Result<()> {
        if (self.predicate)(event) {
            return self.inner.handle(event);
        }
        Ok(())
    }

    fn as_closeable(&mut self) -> Option<&mut dyn Closeable> {
        self.inner.as_closeable()
    }

    fn as_inspectable(&self) -> Option<&dyn Inspectable> {
        self.inner.as_inspectable()
    }
}
