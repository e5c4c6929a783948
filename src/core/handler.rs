//! Handler trait and its optional capabilities

use super::{error::Result, event::Event};

/// Sink for log events
///
/// `handle` takes `&mut self`: handlers holding unsynchronized state (open
/// files, write buffers) rely on the caller to serialize access, and the
/// borrow checker enforces it. Optional capabilities are discovered per
/// instance through the `as_*` accessors instead of being implemented as
/// no-ops everywhere.
pub trait Handler: Send {
    /// Process one event. An error means this handler's write failed.
    fn handle(&mut self, event: &Event) -> Result<()>;

    /// Lifecycle capability, if this handler holds resources to release
    fn as_closeable(&mut self) -> Option<&mut dyn Closeable> {
        None
    }

    /// Inspection capability, if this handler retains what it received
    fn as_inspectable(&self) -> Option<&dyn Inspectable> {
        None
    }
}

/// Flush and release held resources at shutdown
///
/// Called once by the owner of the chain. Failures cannot be acted upon by
/// the caller; implementations report them on stderr.
pub trait Closeable {
    fn close(&mut self);
}

/// Retrieve every formatted record a handler has stored
pub trait Inspectable {
    fn messages(&self) -> Vec<String>;
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&mut self, event: &Event) -> Result<()> {
        (**self).handle(event)
    }

    fn as_closeable(&mut self) -> Option<&mut dyn Closeable> {
        (**self).as_closeable()
    }

    fn as_inspectable(&self) -> Option<&dyn Inspectable> {
        (**self).as_inspectable()
    }
}

/// Close `handler` if it supports the lifecycle capability
///
/// Returns whether a close happened.
pub fn close_handler<H: Handler + ?Sized>(handler: &mut H) -> bool {
    match handler.as_closeable() {
        Some(closeable) => {
            closeable.close();
            true
        }
        None => false,
    }
}
