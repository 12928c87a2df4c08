//! Log level definitions

use super::error::LoggerError;
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
///
/// The numeric order defines filtering: a logger configured at level `L`
/// emits records whose level is `>= L`. `Unknown` is what an unrecognized
/// level name parses to and is never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Unknown = 0,
    Debug = 1,
    Trace = 2,
    Info = 3,
    Warning = 4,
    Error = 5,
    Fatal = 6,
}

impl LogLevel {
    /// Every named level, lowest severity first
    pub const NAMED: [LogLevel; 6] = [
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Fatal,
    ];

    /// Parse a level name, case-insensitively.
    ///
    /// Unrecognized names map to [`LogLevel::Unknown`].
    ///
    /// ```
    /// use rust_leveled_logger::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("Warning"), LogLevel::Warning);
    /// assert_eq!(LogLevel::parse("verbose"), LogLevel::Unknown);
    /// ```
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            "info" => LogLevel::Info,
            "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            "fatal" => LogLevel::Fatal,
            _ => LogLevel::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Unknown => "UNKNOWN",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// Whether records at this level are copied to the error-mirror file
    #[inline]
    pub fn is_mirrored(&self) -> bool {
        *self >= LogLevel::Error
    }

    #[cfg(feature = "color")]
    pub fn color(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            LogLevel::Unknown => White,
            LogLevel::Debug => Blue,
            LogLevel::Trace => BrightBlack,
            LogLevel::Info => Green,
            LogLevel::Warning => Yellow,
            LogLevel::Error => Red,
            LogLevel::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match LogLevel::parse(s) {
            LogLevel::Unknown => Err(LoggerError::invalid_level(s)),
            level => Ok(level),
        }
    }
}
