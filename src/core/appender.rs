//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

/// A sink that renders and writes one record at a time.
///
/// Appenders are driven by [`Logger`](crate::Logger) under a per-sink lock,
/// so implementations can mutate their state freely inside `append`.
pub trait Appender: Send {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}
