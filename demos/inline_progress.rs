//! Inline progress example
//!
//! Demonstrates redrawing the current terminal row through the global logger.
//!
//! Run with: cargo run --example inline_progress

use rust_dual_logger::{global, LogLevel};
use std::thread;
use std::time::Duration;

fn main() {
    global::set_global_level(LogLevel::Debug);
    global::info("Downloading", &[&"archive.tar.gz"]);

    global::start_inline();
    for percent in (0..=100).step_by(10) {
        global::text("progress", &[&format!("{}%", percent)]);
        thread::sleep(Duration::from_millis(150));
    }
    global::stop_inline();

    global::info("Download complete", &[]);
}
