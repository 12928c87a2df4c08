//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and record the file,
//! function and line of the call.
//!
//! # Examples
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::info;
//!
//! let logger = ConsoleLogger::new("debug").unwrap();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Name of the enclosing function, without its module path.
///
/// # Examples
///
/// ```
/// fn load_settings() -> &'static str {
///     rust_leveled_logger::function_name!()
/// }
/// assert_eq!(load_settings(), "load_settings");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::call_site::__enclosing_function(type_name_of(f))
    }};
}

/// [`CallSite`](crate::CallSite) of the macro invocation.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), $crate::function_name!(), line!())
    };
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = ConsoleLogger::new("debug").unwrap();
/// use rust_leveled_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $crate::Logger::log(&$logger, $level, $crate::call_site!(), format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = ConsoleLogger::new("debug").unwrap();
/// use rust_leveled_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_leveled_logger::prelude::*;
/// # let logger = ConsoleLogger::new("debug").unwrap();
/// use rust_leveled_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message. File loggers also copy it to the error-mirror file.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Logging does not terminate the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{CallSite, LogLevel, Logger};
    use parking_lot::Mutex;
    use std::fmt;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(LogLevel, CallSite, String)>>,
    }

    impl Logger for Recorder {
        fn enabled(&self, _level: LogLevel) -> bool {
            true
        }

        fn log(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
            self.calls.lock().push((level, call_site, args.to_string()));
        }
    }

    #[test]
    fn test_log_macro() {
        let logger = Recorder::default();
        let line = line!() + 1;
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let calls = logger.calls.lock();
        let (level, site, message) = &calls[0];
        assert_eq!(*level, LogLevel::Info);
        assert_eq!(message, "Formatted: 42");
        assert_eq!(site.line, line);
        assert_eq!(site.function, "test_log_macro");
        assert_eq!(site.file_name(), "macros.rs");
    }

    #[test]
    fn test_leveled_macros() {
        let logger = Recorder::default();
        debug!(logger, "d");
        trace!(logger, "t {}", 1);
        info!(logger, "i");
        warning!(logger, "w");
        error!(logger, "e");
        fatal!(logger, "f {}", "x");

        let calls = logger.calls.lock();
        let levels: Vec<LogLevel> = calls.iter().map(|(l, _, _)| *l).collect();
        assert_eq!(levels, LogLevel::NAMED.to_vec());
        assert_eq!(calls[5].2, "f x");
    }

    #[test]
    fn test_macro_accepts_references_and_boxes() {
        let logger = Recorder::default();
        let by_ref = &logger;
        info!(by_ref, "through a reference");

        let boxed: Box<dyn Logger> = Box::new(Recorder::default());
        info!(boxed, "through a box");

        assert_eq!(logger.calls.lock().len(), 1);
    }

    #[test]
    fn test_function_name_inside_closure() {
        let name = (|| crate::function_name!())();
        assert_eq!(name, "test_function_name_inside_closure");
    }
}
