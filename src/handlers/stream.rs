//! Direct, unbuffered stream handler

use crate::core::{Event, Formatter, Handler, Result};
use std::io::{self, Stderr, Stdout, Write};
use std::sync::Arc;

/// Formats each event and writes it straight to the wrapped writer
///
/// Write errors are returned as-is; nothing is retained between calls.
pub struct StreamHandler<W> {
    out: W,
    formatter: Arc<dyn Formatter>,
}

impl<W: Write + Send> StreamHandler<W> {
    pub fn new(out: W, formatter: impl Formatter + 'static) -> Self {
        Self {
            out,
            formatter: Arc::new(formatter),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl StreamHandler<Stdout> {
    pub fn stdout(formatter: impl Formatter + 'static) -> Self {
        Self::new(io::stdout(), formatter)
    }
}

impl StreamHandler<Stderr> {
    pub fn stderr(formatter: impl Formatter + 'static) -> Self {
        Self::new(io::stderr(), formatter)
    }
}

impl<W: Write + Send> Handler for StreamHandler<W> {
    fn handle(&mut self, event: &Event) -> Result<()> {
        self.out.write_all(&self.formatter.format(event))?;
        Ok(())
    }
}
