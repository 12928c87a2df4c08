//! Log record structure

use super::call_site::CallSite;
use super::log_level::LogLevel;
use super::timestamp;
use std::fmt;

/// One log call, captured at the call site and queued for the writer.
///
/// Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: LogLevel,
    message: String,
    call_site: CallSite,
    timestamp: String,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so that every record stays on a single line.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build a record stamped with the current local time
    pub fn new(level: LogLevel, message: impl AsRef<str>, call_site: CallSite) -> Self {
        Self::with_timestamp(level, message, call_site, timestamp::now_line())
    }

    pub fn with_timestamp(
        level: LogLevel,
        message: impl AsRef<str>,
        call_site: CallSite,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            level,
            message: Self::sanitize_message(message.as_ref()),
            call_site,
            timestamp: timestamp.into(),
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn call_site(&self) -> &CallSite {
        &self.call_site
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Render the record as one newline-terminated log line
    pub fn format_line(&self) -> String {
        format!("{}\n", self)
    }
}

/// `[<timestamp>] [<LEVEL>] [<file> :<function> :<line>] <message>`
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{} :{} :{}] {}",
            self.timestamp,
            self.level,
            self.call_site.file_name(),
            self.call_site.function,
            self.call_site.line,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> CallSite {
        CallSite::new("src/bin/server.rs", "handle_request", 42)
    }

    #[test]
    fn test_format_line() {
        let record = LogRecord::with_timestamp(
            LogLevel::Info,
            "listening on 8080",
            site(),
            "2025-01-08 10:30:45",
        );
        assert_eq!(
            record.format_line(),
            "[2025-01-08 10:30:45] [INFO] [server.rs :handle_request :42] listening on 8080\n"
        );
    }

    #[test]
    fn test_message_is_sanitized() {
        let record = LogRecord::new(LogLevel::Error, "line one\nline two\r\tend", site());
        assert_eq!(record.message(), "line one\\nline two\\r\\tend");
        assert_eq!(record.format_line().matches('\n').count(), 1);
    }

    #[test]
    fn test_new_stamps_current_time() {
        let record = LogRecord::new(LogLevel::Debug, "x", site());
        assert_eq!(record.timestamp().len(), 19);
        assert_eq!(record.level(), LogLevel::Debug);
        assert_eq!(record.call_site().line, 42);
    }
}
