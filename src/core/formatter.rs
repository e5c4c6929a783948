//! Formatter trait: pure conversion of an event into encoded bytes

use super::event::Event;
use std::sync::Arc;

/// Converts an event into its encoded byte representation
///
/// Implementations hold no mutable state and must never fail: any internal
/// encoding problem degrades into best-effort output instead of an error.
/// Every built-in formatter terminates its output with exactly one `\n`.
pub trait Formatter: Send + Sync {
    fn format(&self, event: &Event) -> Vec<u8>;
}

impl<F: Formatter + ?Sized> Formatter for Arc<F> {
    fn format(&self, event: &Event) -> Vec<u8> {
        (**self).format(event)
    }
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, event: &Event) -> Vec<u8> {
        (**self).format(event)
    }
}

/// Formatter backed by a closure
///
/// # Example
///
/// ```
/// use ligno::core::{formatter_fn, Event, Formatter, LogLevel};
///
/// let upper = formatter_fn(|event: &Event| format!("{}\n", event.message.to_uppercase()).into_bytes());
/// assert_eq!(upper.format(&Event::new(LogLevel::Info, "hi")), b"HI\n");
/// ```
pub struct FormatterFn<F>(F);

pub fn formatter_fn<F>(f: F) -> FormatterFn<F>
where
    F: Fn(&Event) -> Vec<u8> + Send + Sync,
{
    FormatterFn(f)
}

impl<F> Formatter for FormatterFn<F>
where
    F: Fn(&Event) -> Vec<u8> + Send + Sync,
{
    fn format(&self, event: &Event) -> Vec<u8> {
        (self.0)(event)
    }
}
