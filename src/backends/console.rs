//! Console logger implementation

use crate::core::call_site::CallSite;
use crate::core::error::Result;
use crate::core::log_level::LogLevel;
use crate::core::log_record::LogRecord;
use crate::core::logger::Logger;
use crate::core::metrics::LoggerMetrics;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

/// Synchronous logger writing one line per record to standard output.
pub struct ConsoleLogger {
    level: LogLevel,
    use_colors: bool,
    writer: Mutex<Box<dyn Write + Send>>,
    metrics: LoggerMetrics,
}

impl ConsoleLogger {
    /// Create a logger printing records at `level` and above to stdout
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidLevel`](crate::LoggerError::InvalidLevel)
    /// if `level` is not a level name.
    pub fn new(level: &str) -> Result<Self> {
        Self::with_writer(level, io::stdout())
    }

    /// Same as [`ConsoleLogger::new`], writing to `writer` instead of stdout
    pub fn with_writer(level: &str, writer: impl Write + Send + 'static) -> Result<Self> {
        Ok(Self {
            level: level.parse()?,
            use_colors: false,
            writer: Mutex::new(Box::new(writer)),
            metrics: LoggerMetrics::new(),
        })
    }

    /// Color the level tag (requires the `color` feature)
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn format_line(&self, record: &LogRecord) -> String {
        #[cfg(feature = "color")]
        if self.use_colors {
            use colored::Colorize;
            let site = record.call_site();
            return format!(
                "[{}] [{}] [{} :{} :{}] {}\n",
                record.timestamp(),
                record.level().as_str().color(record.level().color()),
                site.file_name(),
                site.function,
                site.line,
                record.message()
            );
        }
        record.format_line()
    }

    fn write_record(&self, record: &LogRecord) {
        let line = self.format_line(record);
        let result = {
            let mut writer = self.writer.lock();
            writer.write_all(line.as_bytes())
        };
        match result {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => {
                if self.metrics.record_write_failure() == 0 {
                    eprintln!("[LOGGER ERROR] Console write failed: {}", e);
                }
            }
        }
    }
}

impl Logger for ConsoleLogger {
    #[inline]
    fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Unknown && level >= self.level
    }

    fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.metrics.record_enqueued();
        let record = LogRecord::new(level, args.to_string(), call_site);
        self.write_record(&record);
    }
}

impl fmt::Debug for ConsoleLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleLogger")
            .field("level", &self.level)
            .field("use_colors", &self.use_colors)
            .finish()
    }
}
