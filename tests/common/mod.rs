//! Shared helpers for integration tests

#![allow(dead_code)]

use parking_lot::Mutex;
use rust_dual_logger::appenders::console::FixedWidth;
use rust_dual_logger::{LogLevel, Logger, LoggerBuilder};
use std::io::{self, Write};
use std::sync::Arc;

/// In-memory console that can be read back after logging.
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.lock().clone()).expect("console output is utf-8")
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

/// Builder preset for tests: no colors, captured console, fixed width.
pub fn builder(level: LogLevel, out: &Captured) -> LoggerBuilder {
    Logger::builder()
        .level(level)
        .colors(false)
        .console_writer(out.clone())
        .terminal_width(FixedWidth(20))
}

pub fn capture(level: LogLevel) -> (Logger, Captured) {
    let out = Captured::default();
    let logger = builder(level, &out).build();
    (logger, out)
}
