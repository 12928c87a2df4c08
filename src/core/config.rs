//! Logger configuration and backend selection

use super::error::{LoggerError, Result};
use super::logger::Logger;
use crate::backends::{ConsoleLogger, FileLogger, FileLoggerBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default queue capacity of the file backend
pub const DEFAULT_QUEUE_CAPACITY: usize = 50_000;

/// Default size threshold at which a log file is rotated (1 MiB)
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024;

/// Default wait of the writer when its queue is empty, in milliseconds
pub const DEFAULT_IDLE_INTERVAL_MS: u64 = 1000;

/// Output backend of a logger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    File,
    Console,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::File => f.write_str("file"),
            BackendKind::Console => f.write_str("console"),
        }
    }
}

impl FromStr for BackendKind {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(BackendKind::File),
            "console" => Ok(BackendKind::Console),
            _ => Err(LoggerError::config(
                "backend",
                format!("unknown backend kind '{}', expected 'file' or 'console'", s),
            )),
        }
    }
}

/// Complete logger configuration.
///
/// Every field has a default, so a configuration file only needs the
/// fields it changes.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{BackendKind, LoggerConfig};
///
/// let config = LoggerConfig::from_json_str(
///     r#"{ "backend": "console", "level": "warning" }"#,
/// ).unwrap();
/// assert_eq!(config.backend, BackendKind::Console);
/// assert_eq!(config.queue_capacity, 50_000);
///
/// let logger = config.build().unwrap();
/// logger.error(format_args!("shown"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub backend: BackendKind,
    /// Minimum level name, e.g. "info"
    pub level: String,
    pub directory: PathBuf,
    /// Base name of the log files, without the `.log` extension
    pub file_name: String,
    pub max_file_size: u64,
    pub queue_capacity: usize,
    /// Also rotate whenever the wall-clock hour changes
    pub hourly_rotation: bool,
    pub idle_interval_ms: u64,
    pub lock_files: bool,
    /// Color the level tag on the console
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::File,
            level: "debug".to_string(),
            directory: PathBuf::from("."),
            file_name: "log".to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            hourly_rotation: false,
            idle_interval_ms: DEFAULT_IDLE_INTERVAL_MS,
            lock_files: true,
            colors: false,
        }
    }
}

impl LoggerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "read logger configuration",
                format!("Failed to read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&contents)
    }

    /// Construct the configured backend
    ///
    /// # Errors
    ///
    /// Returns an error for an unparsable level, invalid file settings, or log
    /// files that cannot be opened.
    pub fn build(&self) -> Result<Box<dyn Logger>> {
        match self.backend {
            BackendKind::Console => Ok(Box::new(
                ConsoleLogger::new(&self.level)?.with_colors(self.colors),
            )),
            BackendKind::File => Ok(Box::new(FileLoggerBuilder::from_config(self).build()?)),
        }
    }
}

/// Build a logger from a backend name and a level name.
///
/// The file backend writes `./log.log` and `./logerr.log`, rotating at 1 MiB.
///
/// # Errors
///
/// An unknown backend kind or level name is a configuration error.
pub fn build_logger(kind: &str, level: &str) -> Result<Box<dyn Logger>> {
    let backend: BackendKind = kind.parse()?;
    match backend {
        BackendKind::Console => Ok(Box::new(ConsoleLogger::new(level)?)),
        BackendKind::File => Ok(Box::new(FileLogger::new(
            level,
            ".",
            "log",
            DEFAULT_MAX_FILE_SIZE,
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("file".parse::<BackendKind>().unwrap(), BackendKind::File);
        assert_eq!("Console".parse::<BackendKind>().unwrap(), BackendKind::Console);
        assert!(matches!(
            "syslog".parse::<BackendKind>(),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
        assert_eq!(BackendKind::Console.to_string(), "console");
    }

    #[test]
    fn test_config_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.backend, BackendKind::File);
        assert_eq!(config.directory, PathBuf::from("."));
        assert_eq!(config.file_name, "log");
        assert_eq!(config.max_file_size, 1024 * 1024);
        assert_eq!(config.queue_capacity, 50_000);
        assert_eq!(config.idle_interval_ms, 1000);
        assert!(!config.hourly_rotation);
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = LoggerConfig::from_json_str(
            r#"{ "level": "error", "file_name": "service", "max_file_size": 4096 }"#,
        )
        .unwrap();
        assert_eq!(config.level, "error");
        assert_eq!(config.file_name, "service");
        assert_eq!(config.max_file_size, 4096);
        assert_eq!(config.queue_capacity, DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn test_config_rejects_bad_json() {
        assert!(matches!(
            LoggerConfig::from_json_str(r#"{ "backend": "syslog" }"#),
            Err(LoggerError::JsonError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logger.json");
        std::fs::write(&path, r#"{ "backend": "console", "colors": true }"#).unwrap();

        let config = LoggerConfig::from_json_file(&path).unwrap();
        assert_eq!(config.backend, BackendKind::Console);
        assert!(config.colors);

        assert!(matches!(
            LoggerConfig::from_json_file(dir.path().join("missing.json")),
            Err(LoggerError::IoOperation { .. })
        ));
    }

    #[test]
    fn test_build_file_backend_from_config() {
        let dir = tempdir().unwrap();
        let config = LoggerConfig {
            level: "warning".to_string(),
            directory: dir.path().to_path_buf(),
            file_name: "svc".to_string(),
            ..LoggerConfig::default()
        };

        let logger = config.build().unwrap();
        assert!(logger.enabled(LogLevel::Warning));
        assert!(!logger.enabled(LogLevel::Info));
        assert!(dir.path().join("svc.log").exists());
        assert!(dir.path().join("svcerr.log").exists());
    }

    #[test]
    fn test_build_rejects_invalid_level() {
        let config = LoggerConfig {
            backend: BackendKind::Console,
            level: "chatty".to_string(),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(LoggerError::InvalidLevel { .. })
        ));
    }

    #[test]
    fn test_build_logger_by_name() {
        let logger = build_logger("console", "info").unwrap();
        assert!(logger.enabled(LogLevel::Info));
        assert!(!logger.enabled(LogLevel::Trace));

        assert!(matches!(
            build_logger("network", "info"),
            Err(LoggerError::InvalidConfiguration { .. })
        ));
        assert!(matches!(
            build_logger("console", "nope"),
            Err(LoggerError::InvalidLevel { .. })
        ));
    }
}
