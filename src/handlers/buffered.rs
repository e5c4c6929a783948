//! Buffered stream handler

use crate::core::{Closeable, Event, Formatter, Handler, Result};
use std::io::{BufWriter, Write};
use std::sync::Arc;

/// Collects formatted records in a fixed-size buffer in front of a writer
///
/// A record that does not fit triggers a write of the buffered bytes to the
/// underlying writer. Remaining bytes reach the writer on `close`.
pub struct BufferedStreamHandler<W: Write> {
    writer: BufWriter<W>,
    formatter: Arc<dyn Formatter>,
}

impl<W: Write + Send> BufferedStreamHandler<W> {
    pub fn new(out: W, buffer_size: usize, formatter: impl Formatter + 'static) -> Self {
        Self {
            writer: BufWriter::with_capacity(buffer_size, out),
            formatter: Arc::new(formatter),
        }
    }

    /// The underlying writer; bytes still in the buffer are not visible here
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    /// Number of bytes waiting in the buffer
    pub fn buffered_len(&self) -> usize {
        self.writer.buffer().len()
    }

    pub fn capacity(&self) -> usize {
        self.writer.capacity()
    }
}

impl<W: Write + Send> Handler for BufferedStreamHandler<W> {
    fn handle(&mut self, event: &Event) -> Result<()> {
        self.writer.write_all(&self.formatter.format(event))?;
        Ok(())
    }

    fn as_closeable(&mut self) -> Option<&mut dyn Closeable> {
        Some(self)
    }
}

impl<W: Write + Send> Closeable for BufferedStreamHandler<W> {
    fn close(&mut self) {
        if let Err(e) = self.writer.flush() {
            eprintln!("[LOGGER ERROR] Buffered handler flush failed: {}", e);
        }
    }
}
