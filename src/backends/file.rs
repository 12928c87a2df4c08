//! Asynchronous file logger
//!
//! Producers format a [`LogRecord`] and hand it to a bounded queue without
//! ever blocking; a single background writer appends records to
//! `<name>.log`, mirrors ERROR and FATAL records to `<name>err.log`, and
//! rotates both files by size.

use super::rotation::RotationStrategy;
use super::writer::LogWriter;
use crate::core::call_site::CallSite;
use crate::core::config::{
    LoggerConfig, DEFAULT_IDLE_INTERVAL_MS, DEFAULT_MAX_FILE_SIZE, DEFAULT_QUEUE_CAPACITY,
};
use crate::core::error::{LoggerError, Result};
use crate::core::log_level::LogLevel;
use crate::core::log_record::LogRecord;
use crate::core::logger::{Logger, DEFAULT_SHUTDOWN_TIMEOUT};
use crate::core::metrics::LoggerMetrics;
use crossbeam_channel::{bounded, Sender, TrySendError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Logger writing to a pair of rotating files through a background thread.
///
/// # Example
///
/// ```no_run
/// use rust_leveled_logger::{info, error, FileLogger};
///
/// let logger = FileLogger::new("info", "/var/log/myapp", "myapp", 10 * 1024 * 1024).unwrap();
/// info!(logger, "service started on port {}", 8080);
/// error!(logger, "this also lands in myapperr.log");
/// ```
pub struct FileLogger {
    level: LogLevel,
    main_path: PathBuf,
    error_path: PathBuf,
    sender: Option<Sender<LogRecord>>,
    worker: Option<JoinHandle<Result<()>>>,
    metrics: Arc<LoggerMetrics>,
}

impl FileLogger {
    /// Open `<directory>/<file_name>.log` and `<directory>/<file_name>err.log`
    /// and start the writer, with the default queue capacity.
    ///
    /// # Errors
    ///
    /// Fails if `level` is not a level name or either file cannot be opened.
    pub fn new(
        level: &str,
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
        max_file_size: u64,
    ) -> Result<Self> {
        Self::builder()
            .level(level)
            .directory(directory)
            .file_name(file_name)
            .max_file_size(max_file_size)
            .build()
    }

    pub fn builder() -> FileLoggerBuilder {
        FileLoggerBuilder::new()
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Path of the main log file
    pub fn path(&self) -> &Path {
        &self.main_path
    }

    /// Path of the error-mirror log file
    pub fn error_path(&self) -> &Path {
        &self.error_path
    }

    /// Number of records dropped because the queue was full or the writer had stopped
    pub fn dropped_count(&self) -> u64 {
        self.metrics.dropped_count()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether the background writer is still running
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Offer a record to the queue without blocking.
    ///
    /// Returns `false` if the record was dropped.
    fn enqueue(&self, record: LogRecord) -> bool {
        let Some(ref sender) = self.sender else {
            self.metrics.record_dropped();
            return false;
        };

        match sender.try_send(record) {
            Ok(()) => {
                self.metrics.record_enqueued();
                true
            }
            Err(TrySendError::Full(_)) => {
                self.metrics.record_queue_full();
                self.metrics.record_dropped();
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                // Writer stopped after a fatal error
                self.metrics.record_dropped();
                false
            }
        }
    }

    /// Stop accepting records and let the writer drain the queue.
    ///
    /// Waits at most `timeout` for the writer to finish; records still queued
    /// after that are lost. Calling it again after a completed shutdown is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::ShutdownTimeout`] if the writer did not finish in
    /// time, or the error that stopped the writer early.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use rust_leveled_logger::{info, FileLogger};
    /// use std::time::Duration;
    ///
    /// let mut logger = FileLogger::new("debug", ".", "app", 1024 * 1024).unwrap();
    /// info!(logger, "Important message");
    ///
    /// if let Err(e) = logger.shutdown(Duration::from_secs(10)) {
    ///     eprintln!("Warning: {}", e);
    /// }
    /// ```
    pub fn shutdown(&mut self, timeout: Duration) -> Result<()> {
        // Closing the channel is the writer's cancellation signal
        drop(self.sender.take());

        let Some(handle) = self.worker.take() else {
            return Ok(());
        };

        let start = Instant::now();
        while !handle.is_finished() {
            if start.elapsed() >= timeout {
                // The detached writer keeps draining until the queue is empty
                return Err(LoggerError::ShutdownTimeout { timeout });
            }
            // Small sleep to avoid busy-waiting
            thread::sleep(Duration::from_millis(10));
        }

        match handle.join() {
            Ok(result) => result,
            Err(_) => Err(LoggerError::writer("log writer thread panicked")),
        }
    }
}

impl Logger for FileLogger {
    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Unknown && level >= self.level
    }

    fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        let record = LogRecord::new(level, args.to_string(), call_site);
        self.enqueue(record);
    }
}

impl fmt::Debug for FileLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileLogger")
            .field("level", &self.level)
            .field("main_path", &self.main_path)
            .field("error_path", &self.error_path)
            .field("running", &self.is_running())
            .finish()
    }
}

impl Drop for FileLogger {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT) {
            eprintln!("[LOGGER ERROR] File logger shutdown: {}", e);
        }

        let dropped = self.metrics.dropped_count();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} dropped logs (drop rate: {:.2}%)",
                dropped,
                self.metrics.drop_rate()
            );
        }
    }
}

/// Builder for [`FileLogger`]
///
/// # Example
///
/// ```no_run
/// use rust_leveled_logger::{FileLogger, RotationStrategy};
/// use std::time::Duration;
///
/// let logger = FileLogger::builder()
///     .level("info")
///     .directory("/var/log/myapp")
///     .file_name("myapp")
///     .rotation(RotationStrategy::size_or_hour_change(50 * 1024 * 1024))
///     .queue_capacity(10_000)
///     .idle_interval(Duration::from_millis(200))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileLoggerBuilder {
    level: String,
    directory: PathBuf,
    file_name: String,
    rotation: RotationStrategy,
    queue_capacity: usize,
    idle_interval: Duration,
    lock_files: bool,
}

impl FileLoggerBuilder {
    pub fn new() -> Self {
        Self {
            level: "debug".to_string(),
            directory: PathBuf::from("."),
            file_name: "log".to_string(),
            rotation: RotationStrategy::size(DEFAULT_MAX_FILE_SIZE),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            idle_interval: Duration::from_millis(DEFAULT_IDLE_INTERVAL_MS),
            lock_files: true,
        }
    }

    /// Builder preloaded with the file settings of `config`
    pub fn from_config(config: &LoggerConfig) -> Self {
        let rotation = if config.hourly_rotation {
            RotationStrategy::size_or_hour_change(config.max_file_size)
        } else {
            RotationStrategy::size(config.max_file_size)
        };
        Self {
            level: config.level.clone(),
            directory: config.directory.clone(),
            file_name: config.file_name.clone(),
            rotation,
            queue_capacity: config.queue_capacity,
            idle_interval: Duration::from_millis(config.idle_interval_ms),
            lock_files: config.lock_files,
        }
    }

    /// Set the minimum level by name
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Base name of the log files; `.log` and `err.log` are appended
    #[must_use = "builder methods return a new value"]
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Size-based rotation at `max_bytes`
    #[must_use = "builder methods return a new value"]
    pub fn max_file_size(mut self, max_bytes: u64) -> Self {
        self.rotation = RotationStrategy::size(max_bytes);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn rotation(mut self, strategy: RotationStrategy) -> Self {
        self.rotation = strategy;
        self
    }

    /// Maximum number of records waiting for the writer
    #[must_use = "builder methods return a new value"]
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// How long the writer waits for a record when the queue is empty
    #[must_use = "builder methods return a new value"]
    pub fn idle_interval(mut self, interval: Duration) -> Self {
        self.idle_interval = interval;
        self
    }

    /// Take an exclusive advisory lock on both files while they are open
    #[must_use = "builder methods return a new value"]
    pub fn lock_files(mut self, lock: bool) -> Self {
        self.lock_files = lock;
        self
    }

    fn validate(&self) -> Result<LogLevel> {
        let level: LogLevel = self.level.parse()?;
        if self.file_name.is_empty() {
            return Err(LoggerError::config("FileLogger", "file name must not be empty"));
        }
        if self.queue_capacity == 0 {
            return Err(LoggerError::config(
                "FileLogger",
                "queue capacity must be at least 1",
            ));
        }
        if self.rotation.max_bytes() == 0 {
            return Err(LoggerError::config(
                "FileLogger",
                "max file size must be at least 1 byte",
            ));
        }
        Ok(level)
    }

    /// Open both log files and start the writer thread
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid, the directory cannot be
    /// created, or either file cannot be opened or locked
    pub fn build(self) -> Result<FileLogger> {
        let level = self.validate()?;

        fs::create_dir_all(&self.directory).map_err(|e| {
            LoggerError::io_operation(
                "create log directory",
                format!("Failed to create directory '{}'", self.directory.display()),
                e,
            )
        })?;

        let main_path = self.directory.join(format!("{}.log", self.file_name));
        let error_path = self.directory.join(format!("{}err.log", self.file_name));
        let metrics = Arc::new(LoggerMetrics::new());

        let writer = LogWriter::open(
            main_path.clone(),
            error_path.clone(),
            self.rotation,
            self.idle_interval,
            self.lock_files,
            Arc::clone(&metrics),
        )?;

        let (sender, receiver) = bounded(self.queue_capacity);
        let worker = writer.spawn(receiver)?;

        Ok(FileLogger {
            level,
            main_path,
            error_path,
            sender: Some(sender),
            worker: Some(worker),
            metrics,
        })
    }
}

impl Default for FileLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
