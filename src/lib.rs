//! # Rust Leveled Logger
//!
//! A lightweight leveled logging library with two backends: a synchronous
//! console logger and an asynchronous file logger.
//!
//! ## Features
//!
//! - **Non-blocking file logging**: records go through a bounded queue to a
//!   single background writer; a full queue drops records instead of blocking
//! - **Size-based rotation**: `<name>.log` becomes `<name>.log.bak<timestamp>`
//!   once it reaches the configured size
//! - **Error mirror**: ERROR and FATAL records are also written to `<name>err.log`
//! - **Call sites**: every line names the calling file, function and line
//!   when logged through the macros; the `Logger` methods cannot see the
//!   calling function and write `?` in its place
//!
//! ```
//! use rust_leveled_logger::prelude::*;
//! use rust_leveled_logger::{info, warning};
//!
//! let logger = ConsoleLogger::new("info").unwrap();
//! info!(logger, "Server listening on port {}", 8080);
//! warning!(logger, "cache is {}% full", 91);
//! ```

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{ConsoleLogger, FileLogger, FileLoggerBuilder, RotationStrategy};
    pub use crate::core::{
        build_logger, BackendKind, CallSite, LogLevel, LogRecord, Logger, LoggerConfig,
        LoggerError, LoggerMetrics, Result, DEFAULT_SHUTDOWN_TIMEOUT,
    };
}

pub use backends::{
    list_backups, ConsoleLogger, FileLogger, FileLoggerBuilder, RotationStrategy,
};
pub use core::{
    build_logger, BackendKind, CallSite, LogLevel, LogRecord, Logger, LoggerConfig, LoggerError,
    LoggerMetrics, Result, DEFAULT_QUEUE_CAPACITY, DEFAULT_SHUTDOWN_TIMEOUT,
};
