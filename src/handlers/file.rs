//! File handler implementation

use crate::core::{Closeable, Event, Formatter, Handler, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Appends formatted events to a file
///
/// The file is opened (created if missing, in append mode) on the first
/// event. An open failure is returned from that `handle` call and retried on
/// the next one. `close` releases the handle; a later event reopens it.
pub struct FileHandler {
    path: PathBuf,
    formatter: Arc<dyn Formatter>,
    file: Option<File>,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>, formatter: impl Formatter + 'static) -> Self {
        Self {
            path: path.into(),
            formatter: Arc::new(formatter),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn open(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| LoggerError::file_open(self.path.display().to_string(), e))
    }
}

impl Handler for FileHandler {
    fn handle(&mut self, event: &Event) -> Result<()> {
        let file = match self.file.take() {
            Some(file) => file,
            None => self.open()?,
        };
        let file = self.file.insert(file);

        file.write_all(&self.formatter.format(event))?;
        Ok(())
    }

    fn as_closeable(&mut self) -> Option<&mut dyn Closeable> {
        Some(self)
    }
}

impl Closeable for FileHandler {
    fn close(&mut self) {
        if let Some(mut file) = self.file.take() {
            if let Err(e) = file.flush() {
                eprintln!(
                    "[LOGGER ERROR] Failed to flush '{}' on close: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}
