//! Log level definitions
//!
//! Levels are ordered from most severe to most verbose. The logger keeps a
//! verbosity ceiling: a record at level `L` is emitted when `ceiling >= L`.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
#[serde(rename_all = "lowercase", from = "String")]
#[repr(u8)]
pub enum LogLevel {
    Fatal = 0,
    Error = 1,
    Warning = 2,
    Info = 3,
    #[default]
    Text = 4,
    Debug = 5,
}

impl LogLevel {
    /// All levels in declaration order, most severe first.
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Text,
        LogLevel::Debug,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "fatal",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Info => "info",
            LogLevel::Text => "text",
            LogLevel::Debug => "debug",
        }
    }

    /// Three-letter tag shown in console lines. `Text` has none.
    pub fn marker(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "PAN",
            LogLevel::Error => "ERR",
            LogLevel::Warning => "WRN",
            LogLevel::Info => "INF",
            LogLevel::Text => "",
            LogLevel::Debug => "DBG",
        }
    }

    /// Returns `true` when a record at `level` passes this ceiling.
    #[inline]
    pub fn allows(&self, level: LogLevel) -> bool {
        *self >= level
    }

    /// Whether console lines at this level carry the caller location.
    pub fn shows_location(&self) -> bool {
        !matches!(self, LogLevel::Info | LogLevel::Text)
    }
}

/// Map a configuration string to a level.
///
/// Matching is case-sensitive. Anything unrecognized falls back to
/// [`LogLevel::Text`]; this never fails.
///
/// ```
/// use rust_dual_logger::{parse_level, LogLevel};
///
/// assert_eq!(parse_level("debug"), LogLevel::Debug);
/// assert_eq!(parse_level("DEBUG"), LogLevel::Text);
/// ```
pub fn parse_level(name: &str) -> LogLevel {
    match name {
        "debug" => LogLevel::Debug,
        "text" => LogLevel::Text,
        "info" => LogLevel::Info,
        "warning" => LogLevel::Warning,
        "error" => LogLevel::Error,
        "fatal" => LogLevel::Fatal,
        _ => LogLevel::Text,
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(parse_level(s))
    }
}

impl From<String> for LogLevel {
    fn from(value: String) -> Self {
        parse_level(&value)
    }
}

impl From<&str> for LogLevel {
    fn from(value: &str) -> Self {
        parse_level(value)
    }
}
