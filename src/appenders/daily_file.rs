//! Daily rotating file appender
//!
//! Appends plain-text records to `<dir>/DD-MM-YYYY.log`. Nothing touches the
//! file system until the first record arrives; the directory and file are
//! created on demand. Whenever a record's calendar day differs from the day of
//! the open file, a new dated file is opened and the previous handle is
//! closed.
//!
//! The appender is driven under its owner's lock, so the rotation decision,
//! the handle swap and the write of each record are a single critical section.

use crate::core::{Appender, Formatter, LogEntry, LoggerError, LoggerMetrics, Result};
use crate::core::timestamp::log_file_name;
use chrono::NaiveDate;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Directory used when none is configured.
pub const DEFAULT_LOG_DIR: &str = "./log";

struct OpenLog {
    file: File,
    date: NaiveDate,
    path: PathBuf,
}

pub struct DailyFileAppender {
    dir: PathBuf,
    current: Option<OpenLog>,
    formatter: Formatter,
    metrics: Arc<LoggerMetrics>,
}

impl DailyFileAppender {
    /// Create an appender for `dir`. No file is opened yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            current: None,
            formatter: Formatter::plain(),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<LoggerMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Path of the file currently open, if any.
    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_ref().map(|log| log.path.as_path())
    }

    /// Calendar day of the file currently open, if any.
    pub fn current_date(&self) -> Option<NaiveDate> {
        self.current.as_ref().map(|log| log.date)
    }

    /// Path the file for `date` lives at.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(log_file_name(date))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.is_dir() {
            fs::create_dir_all(&self.dir)
                .map_err(|e| LoggerError::log_directory(&self.dir, e))?;
        }
        Ok(())
    }

    fn open(&self, date: NaiveDate) -> Result<OpenLog> {
        self.ensure_dir()?;

        let path = self.path_for(date);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::log_file(&path, e))?;

        Ok(OpenLog { file, date, path })
    }

    /// Make sure the open file matches `date`, rotating if it does not.
    ///
    /// On failure the previous handle, if any, stays in place and the next
    /// record retries.
    fn file_for(&mut self, date: NaiveDate) -> Result<&mut File> {
        let stale = self.current.as_ref().map_or(true, |log| log.date != date);
        if stale {
            let fresh = self.open(date)?;
            if let Some(mut previous) = self.current.replace(fresh) {
                previous.file.flush()?;
                self.metrics.record_rotation();
            }
        }

        match self.current.as_mut() {
            Some(log) => Ok(&mut log.file),
            None => Err(LoggerError::other("log file not open")),
        }
    }
}

impl Appender for DailyFileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.file_line(entry);
        let file = self.file_for(entry.timestamp.date_naive())?;

        file.write_all(line.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing log file", "append failed", e))?;
        file.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(log) = self.current.as_mut() {
            log.file.flush()?;
        }
        Ok(())
    }
}
