//! Log entry structure

use super::caller::CallerInfo;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt::Display;

/// Contextual values attached to a record, rendered with their `Display` impl.
pub type LogArgs<'a> = &'a [&'a dyn Display];

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    pub args: Vec<String>,
    pub timestamp: DateTime<Local>,
    pub caller: CallerInfo,
}

impl LogEntry {
    pub fn new(
        level: LogLevel,
        message: impl Into<String>,
        args: LogArgs<'_>,
        timestamp: DateTime<Local>,
        caller: CallerInfo,
    ) -> Self {
        Self {
            level,
            message: message.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            timestamp,
            caller,
        }
    }
}
