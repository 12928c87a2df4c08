//! Async logging example
//!
//! Demonstrates non-blocking logging from many threads through a bounded
//! queue, and what happens when the queue fills up.
//!
//! Run with: cargo run --example async_logging

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::info;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Leveled Logger - Async Logging Example ===\n");

    // Small queue so some records are dropped under load
    let logger = FileLogger::builder()
        .level("info")
        .directory("logs")
        .file_name("async_test")
        .max_file_size(1024 * 1024)
        .queue_capacity(1000)
        .build()?;

    println!("1. High-performance async logging:");

    for i in 0..100 {
        info!(logger, "Message #{}", i);
    }

    println!("   Logged 100 messages asynchronously");

    println!("\n2. Multi-threaded logging:");

    let logger = Arc::new(logger);

    let mut handles = vec![];
    for thread_id in 0..5 {
        let logger = Arc::clone(&logger);
        let handle = thread::spawn(move || {
            for i in 0..10_000 {
                info!(logger, "Thread {} - Message {}", thread_id, i);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        if handle.join().is_err() {
            eprintln!("   a producer thread panicked");
        }
    }

    println!("   5 threads logged 10000 messages each");

    let Ok(mut logger) = Arc::try_unwrap(logger) else {
        return Err(LoggerError::writer("logger still shared"));
    };
    logger.shutdown(Duration::from_secs(5))?;

    let metrics = logger.metrics();
    println!("\n3. Queue statistics:");
    println!("   enqueued:  {}", metrics.enqueued_count());
    println!("   written:   {}", metrics.written_count());
    println!(
        "   dropped:   {} ({:.2}%)",
        metrics.dropped_count(),
        metrics.drop_rate()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check '{}' for file output", logger.path().display());

    Ok(())
}
