//! Main logger implementation
//!
//! A [`Logger`] owns one console sink and one daily file sink, each behind its
//! own mutex, plus the verbosity ceiling. Every call runs synchronously on the
//! caller's thread; there is no background worker.

use super::{
    appender::Appender,
    caller::CallerInfo,
    config::LoggerConfig,
    error::Result,
    log_entry::{LogArgs, LogEntry},
    log_level::LogLevel,
    metrics::LoggerMetrics,
    timestamp::{Clock, SystemClock},
};
use crate::appenders::console::{ConsoleAppender, CrosstermWidth, TerminalWidth, DEFAULT_FALLBACK_WIDTH};
use crate::appenders::daily_file::{DailyFileAppender, DEFAULT_LOG_DIR};
use parking_lot::{Mutex, RwLock};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

pub struct Logger {
    level: RwLock<LogLevel>,
    console: Mutex<ConsoleAppender>,
    file: Mutex<DailyFileAppender>,
    clock: Arc<dyn Clock>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger writing to stdout and `./log` with the given ceiling.
    #[must_use]
    pub fn new(level: LogLevel) -> Self {
        Self::builder().level(level).build()
    }

    #[must_use]
    pub fn from_config(config: &LoggerConfig) -> Self {
        LoggerBuilder::from_config(config).build()
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// Change the verbosity ceiling. Takes effect for the next call.
    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    /// Whether a console record at `level` would be emitted.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.level().allows(level)
    }

    /// Emit a console record at `level`.
    ///
    /// The record is attributed to the calling file and line. Use
    /// [`log!`](crate::log) and the level macros to name the enclosing
    /// function instead.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>, args: LogArgs<'_>) {
        self.log_with_caller(level, message, args, CallerInfo::here());
    }

    /// Emit a console record attributed to an explicit call site.
    pub fn log_with_caller(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        args: LogArgs<'_>,
        caller: CallerInfo,
    ) {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }

        let entry = LogEntry::new(level, message, args, self.clock.now(), caller);
        self.write_console(&entry);
    }

    fn write_console(&self, entry: &LogEntry) {
        let result = self.console.lock().append(entry);
        match result {
            Ok(()) => {
                self.metrics.record_console();
            }
            Err(e) => {
                self.metrics.record_dropped();
                eprintln!("[LOGGER ERROR] Console appender failed: {}", e);
            }
        }
    }

    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>, args: LogArgs<'_>) {
        self.log_with_caller(LogLevel::Fatal, message, args, CallerInfo::here());
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>, args: LogArgs<'_>) {
        self.log_with_caller(LogLevel::Error, message, args, CallerInfo::here());
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>, args: LogArgs<'_>) {
        self.log_with_caller(LogLevel::Warning, message, args, CallerInfo::here());
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>, args: LogArgs<'_>) {
        self.log_with_caller(LogLevel::Info, message, args, CallerInfo::here());
    }

    #[inline]
    #[track_caller]
    pub fn text(&self, message: impl Into<String>, args: LogArgs<'_>) {
        self.log_with_caller(LogLevel::Text, message, args, CallerInfo::here());
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, args: LogArgs<'_>) {
        self.log_with_caller(LogLevel::Debug, message, args, CallerInfo::here());
    }

    /// Render the console line for a record without writing it.
    ///
    /// Returns an empty string when `level` is above the ceiling.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_dual_logger::{Logger, LogLevel};
    ///
    /// let logger = Logger::builder().level(LogLevel::Info).colors(false).build();
    /// assert!(logger.get_text(LogLevel::Info, "ready", &[&3]).contains("INF ready   3"));
    /// assert_eq!(logger.get_text(LogLevel::Debug, "hidden", &[]), "");
    /// ```
    #[track_caller]
    pub fn get_text(&self, level: LogLevel, message: impl Into<String>, args: LogArgs<'_>) -> String {
        self.get_text_with_caller(level, message, args, CallerInfo::here())
    }

    pub fn get_text_with_caller(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        args: LogArgs<'_>,
        caller: CallerInfo,
    ) -> String {
        if !self.enabled(level) {
            return String::new();
        }

        let formatter = *self.console.lock().formatter();
        let entry = LogEntry::new(level, message, args, self.clock.now(), caller);
        formatter.console_line(&entry)
    }

    /// Append a record to today's log file.
    ///
    /// File output is not gated by the verbosity ceiling. Failures are
    /// reported on the console at `Fatal` and the record is dropped; the next
    /// call retries.
    #[track_caller]
    pub fn log_to_file(&self, message: impl Into<String>, args: LogArgs<'_>) {
        self.file_with_caller(message, args, CallerInfo::here());
    }

    pub fn file_with_caller(&self, message: impl Into<String>, args: LogArgs<'_>, caller: CallerInfo) {
        // Stamped under the lock: file order matches timestamp order, so
        // rotation only ever moves forward.
        let result = {
            let mut file = self.file.lock();
            let entry = LogEntry::new(LogLevel::Text, message, args, self.clock.now(), caller);
            file.append(&entry)
        };
        match result {
            Ok(()) => {
                self.metrics.record_file();
            }
            Err(e) => {
                self.metrics.record_dropped();
                self.log_with_caller(LogLevel::Fatal, e.to_string(), &[], caller);
            }
        }
    }

    /// Switch the console to in-place redraw.
    pub fn start_inline(&self) {
        self.console.lock().start_inline();
    }

    /// Leave in-place redraw and move to a fresh line.
    pub fn stop_inline(&self) {
        if let Err(e) = self.console.lock().stop_inline() {
            self.metrics.record_dropped();
            eprintln!("[LOGGER ERROR] Console appender failed: {}", e);
        }
    }

    pub fn is_inline(&self) -> bool {
        self.console.lock().is_inline()
    }

    /// Path of the log file currently open, if one has been opened yet.
    pub fn current_log_file(&self) -> Option<PathBuf> {
        self.file.lock().current_path().map(PathBuf::from)
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_dual_logger::{Logger, LogLevel};
    ///
    /// let logger = Logger::builder()
    ///     .level(LogLevel::Info)
    ///     .console_writer(std::io::sink())
    ///     .build();
    /// logger.debug("hidden", &[]);
    /// logger.info("shown", &[]);
    ///
    /// assert_eq!(logger.metrics().suppressed_count(), 1);
    /// assert_eq!(logger.metrics().console_lines(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.console.lock().flush()?;
        self.file.lock().flush()?;
        Ok(())
    }

    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_dual_logger::prelude::*;
/// use rust_dual_logger::appenders::console::FixedWidth;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .log_dir("/tmp/app-log")
///     .colors(false)
///     .terminal_width(FixedWidth(100))
///     .build();
/// assert_eq!(logger.level(), LogLevel::Info);
/// ```
pub struct LoggerBuilder {
    level: LogLevel,
    log_dir: PathBuf,
    colors: bool,
    fallback_width: u16,
    console_writer: Option<Box<dyn Write + Send>>,
    terminal_width: Option<Box<dyn TerminalWidth>>,
    clock: Arc<dyn Clock>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: LogLevel::Debug,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            colors: true,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            console_writer: None,
            terminal_width: None,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new()
            .level(config.level)
            .log_dir(config.log_dir.clone())
            .colors(config.colors)
            .fallback_width(config.fallback_width)
    }

    /// Set the verbosity ceiling
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the directory receiving dated log files
    #[must_use = "builder methods return a new value"]
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enabled: bool) -> Self {
        self.colors = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn fallback_width(mut self, columns: u16) -> Self {
        self.fallback_width = columns;
        self
    }

    /// Send console output somewhere other than stdout
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console_writer = Some(Box::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn terminal_width<T: TerminalWidth + 'static>(mut self, width: T) -> Self {
        self.terminal_width = Some(Box::new(width));
        self
    }

    /// Use a custom clock for timestamps and rotation
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let metrics = Arc::new(LoggerMetrics::new());

        let writer: Box<dyn Write + Send> = match self.console_writer {
            Some(writer) => writer,
            None => Box::new(io::stdout()),
        };
        let width: Box<dyn TerminalWidth> = match self.terminal_width {
            Some(width) => width,
            None => Box::new(CrosstermWidth),
        };

        let console = ConsoleAppender::with_writer(writer)
            .with_colors(self.colors)
            .with_terminal_width(width)
            .with_fallback_width(self.fallback_width)
            .with_metrics(Arc::clone(&metrics));
        let file = DailyFileAppender::new(self.log_dir).with_metrics(Arc::clone(&metrics));

        Logger {
            level: RwLock::new(self.level),
            console: Mutex::new(console),
            file: Mutex::new(file),
            clock: self.clock,
            metrics,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
