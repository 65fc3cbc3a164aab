//! Process-wide logger
//!
//! Applications normally build a [`Logger`] at their composition root and pass
//! it down. For code that cannot, this module keeps one shared instance for
//! the lifetime of the process. Install it explicitly with [`init`]; if
//! nothing was installed, the first use creates a default logger with the
//! `Debug` ceiling, writing to stdout and `./log`.
//!
//! ```no_run
//! use rust_dual_logger::{global, Logger, LogLevel};
//!
//! global::init(Logger::new(LogLevel::Info)).expect("installed once");
//! global::info("service started", &[&"v1.2"]);
//! global::set_global_level(LogLevel::Debug);
//! global::debug("listening", &[&8080]);
//! ```
//!
//! The functions here report the source file of the call. The `global_*`
//! macros ([`global_debug!`](crate::global_debug), [`global_log_file!`](crate::global_log_file)
//! and friends) report the enclosing function instead:
//!
//! ```no_run
//! use rust_dual_logger::{global_debug, global_log_file};
//!
//! fn connect() {
//!     global_debug!("connecting", "host1", 8080);
//!     global_log_file!("connected", "host1");
//! }
//! # connect();
//! ```

use crate::core::{CallerInfo, LogArgs, LogLevel, Logger, LoggerError, Result};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install `logger` as the process-wide instance.
///
/// Fails with [`LoggerError::AlreadyInitialized`] if an instance already
/// exists, including one created implicitly by an earlier call.
pub fn init(logger: Logger) -> Result<()> {
    GLOBAL
        .set(logger)
        .map_err(|_| LoggerError::AlreadyInitialized)
}

/// The process-wide logger, created with defaults on first use.
pub fn logger() -> &'static Logger {
    GLOBAL.get_or_init(|| Logger::new(LogLevel::Debug))
}

pub fn set_global_level(level: LogLevel) {
    logger().set_level(level);
}

pub fn global_level() -> LogLevel {
    logger().level()
}

pub fn start_inline() {
    logger().start_inline();
}

pub fn stop_inline() {
    logger().stop_inline();
}

#[track_caller]
pub fn log_to_console(level: LogLevel, message: impl Into<String>, args: LogArgs<'_>) {
    logger().log_with_caller(level, message, args, CallerInfo::here());
}

#[track_caller]
pub fn log_to_file(message: impl Into<String>, args: LogArgs<'_>) {
    logger().file_with_caller(message, args, CallerInfo::here());
}

#[track_caller]
pub fn get_text(level: LogLevel, message: impl Into<String>, args: LogArgs<'_>) -> String {
    logger().get_text_with_caller(level, message, args, CallerInfo::here())
}

#[track_caller]
pub fn fatal(message: impl Into<String>, args: LogArgs<'_>) {
    logger().log_with_caller(LogLevel::Fatal, message, args, CallerInfo::here());
}

#[track_caller]
pub fn error(message: impl Into<String>, args: LogArgs<'_>) {
    logger().log_with_caller(LogLevel::Error, message, args, CallerInfo::here());
}

#[track_caller]
pub fn warning(message: impl Into<String>, args: LogArgs<'_>) {
    logger().log_with_caller(LogLevel::Warning, message, args, CallerInfo::here());
}

#[track_caller]
pub fn info(message: impl Into<String>, args: LogArgs<'_>) {
    logger().log_with_caller(LogLevel::Info, message, args, CallerInfo::here());
}

#[track_caller]
pub fn text(message: impl Into<String>, args: LogArgs<'_>) {
    logger().log_with_caller(LogLevel::Text, message, args, CallerInfo::here());
}

#[track_caller]
pub fn debug(message: impl Into<String>, args: LogArgs<'_>) {
    logger().log_with_caller(LogLevel::Debug, message, args, CallerInfo::here());
}
