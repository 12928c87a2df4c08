//! File logging example
//!
//! Demonstrates the file backend: main log, error mirror and size rotation.
//!
//! Run with: cargo run --example file_logging

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{debug, error, info, list_backups, warning};
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - File Logging Example ===\n");

    // Rotate after 4 KiB so the example produces a few backups
    let mut logger = FileLogger::new("debug", "logs", "application", 4 * 1024)?;

    println!("1. Logging to {}:", logger.path().display());

    info!(logger, "Application started");
    debug!(logger, "Loading configuration...");
    info!(logger, "Configuration loaded successfully");
    warning!(logger, "Using default settings for some options");
    info!(logger, "Connecting to database...");
    error!(logger, "Failed to load optional plugin");
    info!(logger, "Application initialization complete");

    println!("\n2. Performing some operations:");

    for i in 1..=200 {
        info!(logger, "Processing item {}/200", i);
        if i % 50 == 0 {
            warning!(logger, "Item {} took longer than expected", i);
        }
    }

    info!(logger, "All operations completed");

    // Drain the queue before reading the files back
    logger.shutdown(Duration::from_secs(5))?;

    let backups = list_backups(logger.path())?;
    println!("   {} records written", logger.metrics().written_count());
    println!("   {} rotated backups:", backups.len());
    for backup in &backups {
        println!("     {}", backup.display());
    }

    println!("\n=== Example completed successfully! ===");
    println!(
        "Errors were also copied to '{}'",
        logger.error_path().display()
    );

    Ok(())
}
