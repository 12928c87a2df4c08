//! Background writer of the file backend
//!
//! A single thread owns both log files, so no two writers ever interleave
//! bytes in the same file. It drains the record queue, rotates each file
//! independently when it is due, and copies ERROR and FATAL records to the
//! error-mirror file.

use super::rotation::{ActiveFile, RotationStrategy};
use crate::core::error::{LoggerError, Result};
use crate::core::log_record::LogRecord;
use crate::core::metrics::LoggerMetrics;
use chrono::Local;
use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Name of the background writer thread
pub const WRITER_THREAD_NAME: &str = "log-writer";

pub(crate) struct LogWriter {
    main: ActiveFile,
    error: ActiveFile,
    strategy: RotationStrategy,
    idle_interval: Duration,
    metrics: Arc<LoggerMetrics>,
}

impl LogWriter {
    pub(crate) fn open(
        main_path: PathBuf,
        error_path: PathBuf,
        strategy: RotationStrategy,
        idle_interval: Duration,
        lock_files: bool,
        metrics: Arc<LoggerMetrics>,
    ) -> Result<Self> {
        let main = ActiveFile::open(main_path, lock_files)?;
        let error = ActiveFile::open(error_path, lock_files)?;
        Ok(Self {
            main,
            error,
            strategy,
            idle_interval,
            metrics,
        })
    }

    pub(crate) fn spawn(self, receiver: Receiver<LogRecord>) -> Result<JoinHandle<Result<()>>> {
        thread::Builder::new()
            .name(WRITER_THREAD_NAME.to_string())
            .spawn(move || self.run(receiver))
            .map_err(|e| {
                LoggerError::io_operation("starting log writer", "Failed to spawn thread", e)
            })
    }

    /// Drain `receiver` until every sender is gone.
    ///
    /// Returns an error only when a rotated file cannot be replaced.
    pub(crate) fn run(mut self, receiver: Receiver<LogRecord>) -> Result<()> {
        let mut pending: Option<LogRecord> = None;

        loop {
            if self.main.should_rotate(&self.strategy, &Local::now()) {
                Self::rotate(&mut self.main, &self.metrics)?;
            }

            let record = match pending.take() {
                Some(record) => record,
                None => match receiver.try_recv() {
                    Ok(record) => record,
                    Err(TryRecvError::Empty) => {
                        self.flush();
                        // Idle: wait for the next record, or for shutdown
                        match receiver.recv_timeout(self.idle_interval) {
                            Ok(record) => pending = Some(record),
                            Err(RecvTimeoutError::Timeout) => {}
                            Err(RecvTimeoutError::Disconnected) => break,
                        }
                        continue;
                    }
                    Err(TryRecvError::Disconnected) => break,
                },
            };

            self.write_record(&record)?;
        }

        self.flush();
        Ok(())
    }

    fn write_record(&mut self, record: &LogRecord) -> Result<()> {
        let line = record.format_line();

        match self.main.write_line(&line) {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => self.report_failure(&e),
        }

        if record.level().is_mirrored() {
            if self.error.should_rotate(&self.strategy, &Local::now()) {
                Self::rotate(&mut self.error, &self.metrics)?;
            }
            match self.error.write_line(&line) {
                Ok(()) => {
                    self.metrics.record_mirrored();
                }
                Err(e) => self.report_failure(&e),
            }
        }
        Ok(())
    }

    fn rotate(file: &mut ActiveFile, metrics: &LoggerMetrics) -> Result<()> {
        match file.rotate(&Local::now()) {
            Ok(Some(_)) => {
                metrics.record_rotation();
                Ok(())
            }
            Ok(None) => Ok(()),
            Err(e) => {
                eprintln!("[LOGGER CRITICAL] {}. The log writer is stopping.", e);
                Err(e)
            }
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.main.flush() {
            self.report_failure(&e);
        }
        if let Err(e) = self.error.flush() {
            self.report_failure(&e);
        }
    }

    fn report_failure(&self, err: &LoggerError) {
        let failures = self.metrics.record_write_failure();
        // Alert on first failure and periodically thereafter
        if failures % 1000 == 0 {
            eprintln!("[LOGGER ERROR] {} ({} failures so far)", err, failures + 1);
        }
    }
}
