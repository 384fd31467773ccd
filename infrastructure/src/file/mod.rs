//! File-backed log targets.

mod file_target;

pub use file_target::{FileTracer, open_file_target, open_log_tracer, validate_log_path};
