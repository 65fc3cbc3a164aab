//! Error types for the logger

use std::path::Path;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (configuration) error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Log directory could not be created
    #[error("Failed to create log directory '{path}': {source}")]
    LogDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Dated log file could not be opened
    #[error("Failed to open log file '{path}': {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Terminal width could not be queried
    #[error("Terminal size query failed: {0}")]
    TerminalSize(#[source] std::io::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// The process-wide logger was installed twice
    #[error("Global logger already initialized")]
    AlreadyInitialized,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn log_directory(path: &Path, source: std::io::Error) -> Self {
        LoggerError::LogDirectory {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn log_file(path: &Path, source: std::io::Error) -> Self {
        LoggerError::LogFile {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn terminal_size(source: std::io::Error) -> Self {
        LoggerError::TerminalSize(source)
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("LoggerConfig", "fallback_width must be positive");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = LoggerError::log_directory(Path::new("./log"), io_err);
        assert!(matches!(err, LoggerError::LogDirectory { .. }));
    }

    #[test]
    fn test_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such device");
        let err = LoggerError::log_file(Path::new("log/08-01-2025.log"), io_err);
        assert_eq!(
            err.to_string(),
            "Failed to open log file 'log/08-01-2025.log': no such device"
        );

        let io_err = io::Error::new(io::ErrorKind::Other, "not a tty");
        assert_eq!(
            LoggerError::terminal_size(io_err).to_string(),
            "Terminal size query failed: not a tty"
        );

        assert_eq!(
            LoggerError::AlreadyInitialized.to_string(),
            "Global logger already initialized"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("writing log file", "cannot write to file", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing log file"));
        assert!(err.to_string().contains("cannot write to file"));
    }
}
