//! The leveled logging interface shared by every backend

use super::call_site::CallSite;
use super::log_level::LogLevel;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Default shutdown timeout for logger cleanup (5 seconds)
///
/// This grace period is used when a file logger is dropped without an
/// explicit shutdown. For custom timeout control, call `shutdown()` instead.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// A leveled logger.
///
/// Every leveled call is fire-and-forget: it never fails and never blocks on
/// output. Prefer the macros ([`info!`](crate::info) and friends), which also
/// record the calling function; the methods below only capture file and line.
///
/// # Example
///
/// ```
/// use rust_leveled_logger::{ConsoleLogger, Logger};
///
/// let logger = ConsoleLogger::new("info").unwrap();
/// logger.info(format_args!("listening on port {}", 8080));
/// logger.debug(format_args!("suppressed"));
/// ```
pub trait Logger: Send + Sync {
    /// Whether a record at `level` passes this logger's level gate
    fn enabled(&self, level: LogLevel) -> bool;

    /// Emit a record. Implementations return immediately when `level` is not
    /// enabled, before formatting `args`.
    fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>);

    /// Log at DEBUG. The function name is written as `?`; [`debug!`](crate::debug) records it.
    #[track_caller]
    fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Debug, CallSite::caller(), args);
    }

    /// Log at TRACE. The function name is written as `?`; [`trace!`](crate::trace) records it.
    #[track_caller]
    fn trace(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Trace, CallSite::caller(), args);
    }

    /// Log at INFO. The function name is written as `?`; [`info!`](crate::info) records it.
    #[track_caller]
    fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Info, CallSite::caller(), args);
    }

    /// Log at WARNING. The function name is written as `?`; [`warning!`](crate::warning) records it.
    #[track_caller]
    fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Warning, CallSite::caller(), args);
    }

    /// Log at ERROR. The function name is written as `?`; [`error!`](crate::error) records it.
    #[track_caller]
    fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Error, CallSite::caller(), args);
    }

    /// Log at FATAL. The function name is written as `?`; [`fatal!`](crate::fatal) records it.
    #[track_caller]
    fn fatal(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::Fatal, CallSite::caller(), args);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }

    fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
        (**self).log(level, call_site, args);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }

    fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
        (**self).log(level, call_site, args);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn enabled(&self, level: LogLevel) -> bool {
        (**self).enabled(level)
    }

    fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
        (**self).log(level, call_site, args);
    }
}
