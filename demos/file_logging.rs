//! File logging example
//!
//! Demonstrates writing to the console and to the dated log file.
//!
//! Run with: cargo run --example file_logging

use rust_dual_logger::prelude::*;
use rust_dual_logger::log_file;

fn main() -> Result<()> {
    println!("=== Rust Dual Logger - File Logging Example ===\n");

    let config = LoggerConfig::from_json(r#"{ "level": "debug", "log_dir": "./log" }"#)?;
    let logger = Logger::from_config(&config);

    println!("1. Logging to both console and file:");
    logger.info("Application started", &[]);
    logger.log_to_file("Application started", &[&std::process::id()]);

    for i in 1..=5 {
        logger.debug("Processing item", &[&i, &5]);
        log_file!(logger, "processed", i);
    }

    logger.log_to_file("Report", &[&"line one\nline two"]);
    logger.flush()?;

    if let Some(path) = logger.current_log_file() {
        println!("\nCheck '{}' for the file output", path.display());
    }
    println!(
        "Console lines: {}, file lines: {}",
        logger.metrics().console_lines(),
        logger.metrics().file_lines()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
