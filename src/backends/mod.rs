//! Output backends

pub mod console;
pub mod file;
pub mod rotation;
pub mod writer;

pub use console::ConsoleLogger;
pub use file::{FileLogger, FileLoggerBuilder};
pub use rotation::{list_backups, RotationStrategy};

// Re-export the trait for convenience
pub use crate::core::Logger;
