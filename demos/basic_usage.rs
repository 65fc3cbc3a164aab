//! Basic logger usage example
//!
//! Demonstrates console logging at every level and the verbosity ceiling.
//!
//! Run with: cargo run --example basic_usage

use rust_dual_logger::prelude::*;
use rust_dual_logger::{debug, warning};

fn main() -> Result<()> {
    println!("=== Rust Dual Logger - Basic Usage Example ===\n");

    let logger = Logger::new(LogLevel::Debug);

    println!("1. Logging at different levels:");
    logger.fatal("This is a fatal message", &[]);
    logger.error("This is an error message", &[&"code", &500]);
    logger.warning("This is a warning message", &[]);
    logger.info("This is an info message", &[]);
    logger.text("This is a plain text message", &[]);
    logger.debug("This is a debug message", &[&"multi\nline value"]);

    println!("\n2. Macros record the enclosing function:");
    debug!(logger, "connecting", "host1", 8080);
    warning!(logger, "retrying", 3);

    println!("\n3. Lowering the ceiling to info - text and debug won't show:");
    logger.set_level(parse_level("info"));
    logger.text("Text message (hidden)", &[]);
    logger.debug("Debug message (hidden)", &[]);
    logger.info("Info message (visible)", &[]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
