//! Appender implementations

pub mod console;
pub mod daily_file;

pub use console::{ConsoleAppender, CrosstermWidth, FixedWidth, TerminalWidth};
pub use daily_file::DailyFileAppender;

pub use crate::core::Appender;
