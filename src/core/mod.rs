//! Core logger types and traits

pub mod call_site;
pub mod config;
pub mod error;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use call_site::CallSite;
pub use config::{
    build_logger, BackendKind, LoggerConfig, DEFAULT_IDLE_INTERVAL_MS, DEFAULT_MAX_FILE_SIZE,
    DEFAULT_QUEUE_CAPACITY,
};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, DEFAULT_SHUTDOWN_TIMEOUT};
pub use metrics::LoggerMetrics;
