//! # Rust Dual Logger
//!
//! Leveled, colorized logging with two outputs: an ANSI-styled console stream
//! and a plain-text log file that rotates every calendar day.
//!
//! ## Features
//!
//! - **Verbosity ceiling**: `Fatal < Error < Warning < Info < Text < Debug`;
//!   a record is printed when the ceiling is at least its level
//! - **Inline mode**: redraw the current terminal row in place for progress output
//! - **Daily files**: `./log/DD-MM-YYYY.log`, created lazily, rotated on day change
//! - **Thread Safe**: every sink sits behind its own lock; records never interleave
//! - **Call sites**: the logging macros name the enclosing function and line;
//!   plain method calls name the source file and line
//!
//! ```
//! use rust_dual_logger::prelude::*;
//!
//! let logger = Logger::builder()
//!     .level(LogLevel::Debug)
//!     .console_writer(std::io::sink())
//!     .build();
//!
//! logger.debug("connecting", &[&"host1", &8080]);
//! logger.set_level(LogLevel::Info);
//! assert_eq!(logger.get_text(LogLevel::Debug, "hidden", &[]), "");
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, DailyFileAppender};
    pub use crate::core::{
        parse_level, Appender, CallerInfo, Clock, Formatter, LogArgs, LogEntry, LogLevel, Logger,
        LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, ManualClock, Result, SystemClock,
    };
}

pub use appenders::{ConsoleAppender, DailyFileAppender};
pub use core::{
    parse_level, Appender, CallerInfo, Clock, Formatter, LogArgs, LogEntry, LogLevel, Logger,
    LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, ManualClock, Result, SystemClock,
};
