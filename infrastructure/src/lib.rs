//! Infrastructure layer for log-tracer
//!
//! This crate contains the adapters around the tracer use case: log file
//! targets, configuration file loading and `tracing` diagnostics.

pub mod config;
pub mod file;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoader, FileDateTimeConfig, FileTracerConfig};
pub use file::{FileTracer, open_file_target, open_log_tracer, validate_log_path};
pub use logging::TracingObserver;
