//! Stress tests for the file logger's bounded queue
//!
//! These tests verify:
//! - Every attempted record is either enqueued or counted as dropped
//! - Every enqueued record reaches the files exactly once
//! - Producers never block, even with a tiny queue
//! - Thread safety under concurrent high-volume logging with rotation

use rust_leveled_logger::prelude::*;
use rust_leveled_logger::{error, info, list_backups};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tempfile::TempDir;

const SHUTDOWN: Duration = Duration::from_secs(10);

fn all_lines(active: &Path) -> Vec<String> {
    let mut files = list_backups(active).expect("Failed to list backups");
    files.push(active.to_path_buf());
    files
        .iter()
        .flat_map(|path| {
            fs::read_to_string(path)
                .expect("Failed to read log file")
                .lines()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

fn run_producers(logger: &Arc<FileLogger>, threads: usize, per_thread: usize) {
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let logger = Arc::clone(logger);
            thread::spawn(move || {
                for i in 0..per_thread {
                    info!(logger, "producer {} record {}", t, i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Producer thread panicked");
    }
}

/// Unwrap the shared logger once all producers are done
fn into_inner(logger: Arc<FileLogger>) -> FileLogger {
    Arc::try_unwrap(logger).expect("Logger still shared")
}

#[test]
fn test_accounting_under_concurrent_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        FileLogger::builder()
            .level("info")
            .directory(temp_dir.path())
            .file_name("stress")
            .queue_capacity(256)
            .idle_interval(Duration::from_millis(10))
            .build()
            .expect("Failed to create logger"),
    );

    let threads = 8;
    let per_thread = 2_000;
    run_producers(&logger, threads, per_thread);

    let mut logger = into_inner(logger);
    logger.shutdown(SHUTDOWN).expect("Shutdown failed");

    let metrics = logger.metrics();
    let attempts = (threads * per_thread) as u64;
    assert_eq!(metrics.enqueued_count() + metrics.dropped_count(), attempts);
    assert_eq!(metrics.written_count(), metrics.enqueued_count());

    let lines = all_lines(logger.path());
    assert_eq!(lines.len() as u64, metrics.written_count());

    // No record is written twice
    let unique: HashSet<&String> = lines.iter().collect();
    assert_eq!(unique.len(), lines.len());
}

#[test]
fn test_tiny_queue_never_blocks_producers() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        FileLogger::builder()
            .level("debug")
            .directory(temp_dir.path())
            .file_name("tiny")
            .queue_capacity(1)
            .build()
            .expect("Failed to create logger"),
    );

    let start = Instant::now();
    run_producers(&logger, 16, 5_000);
    let elapsed = start.elapsed();

    // 80k non-blocking sends finish far below the time a blocked producer would need
    assert!(
        elapsed < Duration::from_secs(30),
        "producers took {:?}",
        elapsed
    );

    let mut logger = into_inner(logger);
    logger.shutdown(SHUTDOWN).expect("Shutdown failed");

    let metrics = logger.metrics();
    assert_eq!(metrics.enqueued_count() + metrics.dropped_count(), 80_000);
    assert!(metrics.dropped_count() > 0);
    assert_eq!(metrics.queue_full_events(), metrics.dropped_count());
    assert_eq!(
        all_lines(logger.path()).len() as u64,
        metrics.written_count()
    );
}

#[test]
fn test_concurrent_logging_with_rotation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        FileLogger::builder()
            .level("info")
            .directory(temp_dir.path())
            .file_name("rotating")
            .max_file_size(4 * 1024)
            .queue_capacity(100_000)
            .idle_interval(Duration::from_millis(10))
            .build()
            .expect("Failed to create logger"),
    );

    run_producers(&logger, 4, 500);

    let mut logger = into_inner(logger);
    logger.shutdown(SHUTDOWN).expect("Shutdown failed");

    assert_eq!(logger.dropped_count(), 0);
    assert!(logger.metrics().rotation_count() > 1);

    let lines = all_lines(logger.path());
    assert_eq!(lines.len(), 2_000);

    // Records of one producer keep their relative order across backups
    for t in 0..4 {
        let tag = format!("producer {} record ", t);
        let sequence: Vec<usize> = lines
            .iter()
            .filter_map(|l| l.split_once(&tag).map(|(_, n)| n.parse().unwrap()))
            .collect();
        assert_eq!(sequence, (0..500).collect::<Vec<_>>());
    }
}

#[test]
fn test_error_mirror_under_load() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        FileLogger::builder()
            .level("info")
            .directory(temp_dir.path())
            .file_name("mixed")
            .queue_capacity(100_000)
            .build()
            .expect("Failed to create logger"),
    );

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..250 {
                    if i % 10 == 0 {
                        error!(logger, "thread {} failure {}", t, i);
                    } else {
                        info!(logger, "thread {} progress {}", t, i);
                    }
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("Producer thread panicked");
    }

    let mut logger = into_inner(logger);
    logger.shutdown(SHUTDOWN).expect("Shutdown failed");

    assert_eq!(logger.dropped_count(), 0);
    assert_eq!(logger.metrics().mirrored_count(), 100);

    let mirror = fs::read_to_string(logger.error_path()).unwrap();
    assert_eq!(mirror.lines().count(), 100);
    assert!(mirror.lines().all(|l| l.contains("[ERROR]")));

    let main = fs::read_to_string(logger.path()).unwrap();
    assert_eq!(main.lines().count(), 1_000);
}
