//! Console appender implementation
//!
//! Writes colored lines to stdout (or any writer). In inline mode every record
//! first blanks the current terminal row and then redraws in place without a
//! trailing newline, which is what progress-style output needs.

use crate::core::{Appender, Formatter, LogEntry, LoggerError, LoggerMetrics, Result};
use std::io::{self, Write};
use std::sync::Arc;

/// Width used when the terminal cannot be queried.
pub const DEFAULT_FALLBACK_WIDTH: u16 = 80;

/// Source of the current terminal column count.
pub trait TerminalWidth: Send {
    fn columns(&self) -> Result<u16>;
}

impl<T: TerminalWidth + ?Sized> TerminalWidth for Box<T> {
    fn columns(&self) -> Result<u16> {
        (**self).columns()
    }
}

/// Queries the controlling terminal through crossterm.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrosstermWidth;

impl TerminalWidth for CrosstermWidth {
    fn columns(&self) -> Result<u16> {
        let (columns, _rows) = crossterm::terminal::size().map_err(LoggerError::terminal_size)?;
        Ok(columns)
    }
}

/// A terminal that always reports the same width.
#[derive(Debug, Clone, Copy)]
pub struct FixedWidth(pub u16);

impl TerminalWidth for FixedWidth {
    fn columns(&self) -> Result<u16> {
        Ok(self.0)
    }
}

pub struct ConsoleAppender {
    writer: Box<dyn Write + Send>,
    formatter: Formatter,
    width: Box<dyn TerminalWidth>,
    fallback_width: u16,
    inline: bool,
    metrics: Arc<LoggerMetrics>,
}

impl ConsoleAppender {
    /// Colored console on stdout.
    pub fn new() -> Self {
        Self::with_writer(io::stdout()).with_colors(true)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
            formatter: Formatter::plain(),
            width: Box::new(CrosstermWidth),
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            inline: false,
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.formatter = Formatter::new(use_colors);
        self
    }

    /// Replace the terminal width source used by inline redraws.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_dual_logger::appenders::console::{ConsoleAppender, FixedWidth};
    ///
    /// let appender = ConsoleAppender::with_writer(Vec::new())
    ///     .with_terminal_width(FixedWidth(120));
    /// assert_eq!(appender.terminal_columns(), 120);
    /// ```
    #[must_use]
    pub fn with_terminal_width<T: TerminalWidth + 'static>(mut self, width: T) -> Self {
        self.width = Box::new(width);
        self
    }

    #[must_use]
    pub fn with_fallback_width(mut self, columns: u16) -> Self {
        self.fallback_width = columns;
        self
    }

    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<LoggerMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn is_inline(&self) -> bool {
        self.inline
    }

    pub fn start_inline(&mut self) {
        self.inline = true;
    }

    /// Leave inline mode and move the cursor to a fresh line.
    pub fn stop_inline(&mut self) -> Result<()> {
        self.inline = false;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Current terminal width, or the fallback width when the query fails.
    pub fn terminal_columns(&self) -> u16 {
        match self.width.columns() {
            Ok(columns) if columns > 0 => columns,
            Ok(_) | Err(_) => {
                self.metrics.record_width_fallback();
                self.fallback_width
            }
        }
    }

    /// `\r`, one blank per terminal column, `\r`.
    fn erase_sequence(&self) -> String {
        let columns = usize::from(self.terminal_columns());
        let mut erase = String::with_capacity(columns + 2);
        erase.push('\r');
        erase.extend(std::iter::repeat(' ').take(columns));
        erase.push('\r');
        erase
    }

    /// Write an already formatted line using the current mode.
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        if self.inline {
            let erase = self.erase_sequence();
            self.writer.write_all(erase.as_bytes())?;
            self.writer.write_all(line.as_bytes())?;
        } else {
            self.writer.write_all(line.as_bytes())?;
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let line = self.formatter.console_line(entry);
        self.write_line(&line)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenTerminal;

    impl TerminalWidth for BrokenTerminal {
        fn columns(&self) -> Result<u16> {
            Err(LoggerError::terminal_size(io::Error::new(
                io::ErrorKind::Other,
                "not a terminal",
            )))
        }
    }

    #[test]
    fn test_plain_mode_appends_newline() {
        let out = Captured::default();
        let mut appender = ConsoleAppender::with_writer(out.clone());

        appender.write_line("first").unwrap();
        appender.write_line("second").unwrap();

        assert_eq!(out.text(), "first\nsecond\n");
    }

    #[test]
    fn test_inline_mode_redraws_in_place() {
        let out = Captured::default();
        let mut appender =
            ConsoleAppender::with_writer(out.clone()).with_terminal_width(FixedWidth(4));

        appender.start_inline();
        appender.write_line("10%").unwrap();
        appender.write_line("20%").unwrap();

        assert_eq!(out.text(), "\r    \r10%\r    \r20%");
        assert!(!out.text().contains('\n'));
    }

    #[test]
    fn test_stop_inline_emits_single_newline() {
        let out = Captured::default();
        let mut appender =
            ConsoleAppender::with_writer(out.clone()).with_terminal_width(FixedWidth(2));

        appender.start_inline();
        appender.write_line("x").unwrap();
        appender.stop_inline().unwrap();
        appender.write_line("y").unwrap();

        assert!(!appender.is_inline());
        assert_eq!(out.text(), "\r  \rx\ny\n");
    }

    #[test]
    fn test_width_query_failure_uses_fallback() {
        let metrics = Arc::new(LoggerMetrics::new());
        let out = Captured::default();
        let mut appender = ConsoleAppender::with_writer(out.clone())
            .with_terminal_width(BrokenTerminal)
            .with_fallback_width(3)
            .with_metrics(Arc::clone(&metrics));

        appender.start_inline();
        appender.write_line("ok").unwrap();

        assert_eq!(out.text(), "\r   \rok");
        assert_eq!(metrics.width_fallbacks(), 1);
    }

    #[test]
    fn test_zero_width_uses_fallback() {
        let appender = ConsoleAppender::with_writer(Vec::new())
            .with_terminal_width(FixedWidth(0))
            .with_fallback_width(DEFAULT_FALLBACK_WIDTH);
        assert_eq!(appender.terminal_columns(), DEFAULT_FALLBACK_WIDTH);
    }
}
