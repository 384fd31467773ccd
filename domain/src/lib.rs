//! Domain layer for log-tracer
//!
//! This crate contains the value objects and formatting rules of the tracer.
//! It has no dependencies on file handling or configuration loading.
//!
//! # Core Concepts
//!
//! ## Levels
//!
//! [`LevelSet`] is a flag set over `NONE`, `INFO`, `DEBUG`, `WARNING` and
//! `ERROR`. As a filter it may hold any combination of concrete levels, or
//! exactly `NONE` (disabled). As the level of one entry it must hold exactly
//! one concrete level.
//!
//! ## Entries
//!
//! Each emitted entry is one line: a timestamp rendered by
//! [`DateTimeFormat`], an optional level tag, an optional entry number and
//! the message, laid out as plain text or CSV ([`EntryLayout`]).

pub mod core;
pub mod datetime;
pub mod encoding;
pub mod entry;
pub mod level;

// Re-export commonly used types
pub use crate::core::error::{ArgumentError, ConfigurationError, ErrorCategory, TracerError};
pub use datetime::{date_format::DateFormat, date_time_format::DateTimeFormat};
pub use encoding::TextEncoding;
pub use entry::{EMPTY_MESSAGE_PLACEHOLDER, EntryFields, EntryLayout};
pub use level::LevelSet;
