//! Core logger types and traits

pub mod appender;
pub mod caller;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use appender::Appender;
pub use caller::CallerInfo;
pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_entry::{LogArgs, LogEntry};
pub use log_level::{parse_level, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::{Clock, ManualClock, SystemClock};
