//! Basic logger usage example
//!
//! Demonstrates console logging at every level and the effect of the
//! configured minimum level.
//!
//! Run with: cargo run --example basic_usage

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{debug, error, fatal, info, trace, warning};

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Basic Usage Example ===\n");

    // Everything from DEBUG up
    let logger = ConsoleLogger::new("debug")?.with_colors(true);

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message");
    trace!(logger, "This is a trace message");
    info!(logger, "This is an info message");
    warning!(logger, "This is a warning message");
    error!(logger, "This is an error message");
    fatal!(logger, "This is a fatal message (the process keeps running)");

    println!("\n2. Logging with a higher minimum level:");
    let logger = ConsoleLogger::new("info")?;
    println!("   Minimum level set to INFO - debug and trace won't show:");
    debug!(logger, "Debug message (hidden)");
    trace!(logger, "Trace message (hidden)");
    info!(logger, "Info message (visible)");
    warning!(logger, "Warning message (visible)");

    println!("\n3. Unknown level names are rejected:");
    match ConsoleLogger::new("verbose") {
        Ok(_) => println!("   unexpected success"),
        Err(e) => println!("   {}", e),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
