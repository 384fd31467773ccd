//! Domain error types

use crate::level::LevelSet;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or reconfiguring a tracer
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("Incorrect logger levels: 'None' has been set along with other levels ({0})")]
    NoneCombined(LevelSet),

    #[error("Date time separator cannot be unset")]
    MissingDateTimeSeparator,

    #[error("Log file directory does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Log file name is empty: {}", .0.display())]
    EmptyFileName(PathBuf),

    #[error("No log target configured (expected a file path or a writer)")]
    MissingTarget,

    #[error("Invalid logger level: {0}")]
    InvalidLevel(String),

    #[error("{field} must be exactly one character, got {value:?}")]
    InvalidSeparator { field: &'static str, value: String },

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid text encoding: {0}")]
    InvalidEncoding(String),
}

/// Errors raised by a single write call
#[derive(Error, Debug)]
pub enum ArgumentError {
    #[error("'All' cannot be used as the level of a single entry")]
    AggregateLevel,

    #[error("More than one level has been set for a single entry ({0})")]
    MultipleLevels(LevelSet),

    #[error("Log message is unset")]
    MissingMessage,
}

/// Top-level error for every tracer operation
#[derive(Error, Debug)]
pub enum TracerError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Argument error: {0}")]
    Argument(#[from] ArgumentError),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
}

/// Coarse classification of a [`TracerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Argument,
    Storage,
}

impl TracerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TracerError::Configuration(_) => ErrorCategory::Configuration,
            TracerError::Argument(_) => ErrorCategory::Argument,
            TracerError::Storage(_) => ErrorCategory::Storage,
        }
    }

    /// Check if this error came from the underlying writer
    pub fn is_storage(&self) -> bool {
        matches!(self, TracerError::Storage(_))
    }
}
