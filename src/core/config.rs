//! Logger configuration
//!
//! The verbosity ceiling is the only option callers usually tune at runtime;
//! the rest describes where output goes.
//!
//! ```
//! use rust_dual_logger::{LoggerConfig, LogLevel};
//!
//! let config = LoggerConfig::from_json(r#"{ "level": "info", "log_dir": "/tmp/app-log" }"#).unwrap();
//! assert_eq!(config.level, LogLevel::Info);
//! assert!(config.colors);
//! ```

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use crate::appenders::console::DEFAULT_FALLBACK_WIDTH;
use crate::appenders::daily_file::DEFAULT_LOG_DIR;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Verbosity ceiling; unknown names fall back to `text`
    pub level: LogLevel,
    /// Directory receiving the dated log files
    pub log_dir: PathBuf,
    /// Paint console output with ANSI styles
    pub colors: bool,
    /// Columns assumed when the terminal cannot be queried
    pub fallback_width: u16,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            colors: true,
            fallback_width: DEFAULT_FALLBACK_WIDTH,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.fallback_width == 0 {
            return Err(LoggerError::config(
                "LoggerConfig",
                "fallback_width must be at least 1",
            ));
        }
        if self.log_dir.as_os_str().is_empty() {
            return Err(LoggerError::config("LoggerConfig", "log_dir must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.log_dir, PathBuf::from("./log"));
        assert!(config.colors);
        assert_eq!(config.fallback_width, 80);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = LoggerConfig::from_json("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_unknown_level_falls_back_to_text() {
        let config = LoggerConfig::from_json(r#"{ "level": "chatty" }"#).unwrap();
        assert_eq!(config.level, LogLevel::Text);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = LoggerConfig::from_json(r#"{ "fallback_width": 0 }"#).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));

        let err = LoggerConfig::from_json(r#"{ "colors": "yes" }"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }
}
