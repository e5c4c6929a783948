//! Error types for handlers and sinks

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Log file could not be opened for appending
    #[error("Failed to open log file '{path}': {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// A sub-handler of a combining handler panicked
    #[error("Handler #{index} panicked: {message}")]
    HandlerPanicked { index: usize, message: String },

    /// Several sub-handlers failed during one fan-out
    #[error("{} handlers failed: {}", .0.len(), join_errors(.0))]
    Multiple(Vec<LoggerError>),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn join_errors(errors: &[LoggerError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl LoggerError {
    /// Create a file open error
    pub fn file_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a handler panic error
    pub fn handler_panicked(index: usize, message: impl Into<String>) -> Self {
        LoggerError::HandlerPanicked {
            index,
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::file_open("/missing/app.log", io_err);
        assert!(matches!(err, LoggerError::FileOpen { .. }));

        let err = LoggerError::handler_panicked(2, "boom");
        assert!(matches!(err, LoggerError::HandlerPanicked { index: 2, .. }));
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LoggerError::file_open("/var/log/app.log", io_err);
        assert_eq!(
            err.to_string(),
            "Failed to open log file '/var/log/app.log': denied"
        );

        let err = LoggerError::handler_panicked(1, "index out of bounds");
        assert_eq!(err.to_string(), "Handler #1 panicked: index out of bounds");

        let err = LoggerError::writer("sink closed");
        assert_eq!(err.to_string(), "Writer error: sink closed");
    }

    #[test]
    fn test_multiple_error_display() {
        let err = LoggerError::Multiple(vec![
            LoggerError::other("first"),
            LoggerError::other("second"),
        ]);
        assert_eq!(err.to_string(), "2 handlers failed: first; second");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: LoggerError = io_err.into();

        assert!(matches!(err, LoggerError::IoError(_)));
        assert_eq!(err.to_string(), "IO error: pipe closed");
    }
}
