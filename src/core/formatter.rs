//! Line rendering for the console and file sinks
//!
//! Console lines are built from up to five segments, each painted in a
//! level-specific style:
//!
//! ```text
//! 10:30:45.123456 DBG connecting   host1   8080   app::net::connect [42]
//! ```
//!
//! `Text` records drop the timestamp and marker, `Info` and `Text` drop the
//! caller location. File lines are never colored:
//!
//! ```text
//! 10:30:45.123456<TAB>app::net::connect[42]<TAB>connecting<TAB> [host1] [8080]
//! ```

use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::time_of_day;
use colored::{ColoredString, Colorize};

/// Gap between the message, each argument and the caller location.
pub const SEGMENT_GAP: &str = "   ";

/// Rewrite embedded newlines so continuation lines sit one tab deeper.
pub fn indent_continuations(text: &str) -> String {
    text.replace('\n', "\n\t")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    use_colors: bool,
}

impl Formatter {
    /// A formatter that styles console lines when `use_colors` is set.
    ///
    /// `colored` only emits escape codes when it believes stdout is a
    /// terminal. Enabling colors here forces its process-wide override on, so
    /// lines rendered for captured writers or [`Logger::get_text`] are styled
    /// too. Plain formatters never consult `colored`.
    ///
    /// [`Logger::get_text`]: crate::Logger::get_text
    pub fn new(use_colors: bool) -> Self {
        if use_colors {
            colored::control::set_override(true);
        }
        Self { use_colors }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Render the console form of `entry`, without a trailing newline.
    pub fn console_line(&self, entry: &LogEntry) -> String {
        let level = entry.level;
        let mut head: Vec<String> = Vec::with_capacity(3);

        if level != LogLevel::Text {
            head.push(self.paint(&time_of_day(&entry.timestamp), |t| t.white()));
        }
        if !level.marker().is_empty() {
            head.push(self.paint(level.marker(), |t| marker_style(level, t)));
        }
        head.push(self.paint(&entry.message, |t| message_style(level, t)));

        let mut line = head.join(" ");

        for arg in &entry.args {
            line.push_str(SEGMENT_GAP);
            line.push_str(&self.paint(&indent_continuations(arg), |t| arg_style(level, t)));
        }

        if level.shows_location() {
            line.push_str(SEGMENT_GAP);
            line.push_str(&self.paint(&entry.caller.console_label(), |t| t.white()));
        }

        line
    }

    /// Render the file form of `entry`, newline terminated.
    pub fn file_line(&self, entry: &LogEntry) -> String {
        let mut line = format!(
            "{}\t{}\t{}\t",
            time_of_day(&entry.timestamp),
            entry.caller.file_label(),
            entry.message
        );
        for arg in &entry.args {
            line.push_str(" [");
            line.push_str(arg);
            line.push(']');
        }

        let mut line = indent_continuations(&line);
        line.push('\n');
        line
    }

    fn paint(&self, text: &str, style: impl FnOnce(&str) -> ColoredString) -> String {
        if self.use_colors {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(true)
    }
}

fn marker_style(level: LogLevel, text: &str) -> ColoredString {
    match level {
        LogLevel::Fatal | LogLevel::Error => text.red().bold().reversed(),
        LogLevel::Warning => text.yellow().reversed(),
        LogLevel::Info => text.blue().reversed(),
        LogLevel::Debug => text.magenta().reversed(),
        LogLevel::Text => text.normal(),
    }
}

fn message_style(level: LogLevel, text: &str) -> ColoredString {
    match level {
        LogLevel::Fatal => text.red().on_black(),
        LogLevel::Error => text.red(),
        LogLevel::Warning => text.bold(),
        LogLevel::Info => text.cyan(),
        LogLevel::Debug => text.green(),
        LogLevel::Text => text.blue(),
    }
}

fn arg_style(level: LogLevel, text: &str) -> ColoredString {
    match level {
        LogLevel::Fatal => text.underline(),
        LogLevel::Error => text.white().underline(),
        LogLevel::Warning | LogLevel::Text => text.white(),
        LogLevel::Info | LogLevel::Debug => text.blue(),
    }
}
