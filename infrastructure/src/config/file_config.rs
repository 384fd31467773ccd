//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use crate::file::{FileTracer, open_log_tracer};
use log_tracer_application::TracerOptions;
use log_tracer_domain::{
    ConfigurationError, DateFormat, DateTimeFormat, LevelSet, TextEncoding, TracerError,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw date/time formatting configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDateTimeConfig {
    /// Component order (`year4_month2_day2`, `day2_month2_year4`, ...)
    pub date_format: DateFormat,
    /// Single character between date components
    pub date_separator: String,
    /// Single character between time components
    pub time_separator: String,
    /// String between date and time
    pub date_time_separator: String,
}

impl Default for FileDateTimeConfig {
    fn default() -> Self {
        let defaults = DateTimeFormat::default();
        Self {
            date_format: defaults.date_format(),
            date_separator: defaults.date_separator().to_string(),
            time_separator: defaults.time_separator().to_string(),
            date_time_separator: defaults.date_time_separator().to_string(),
        }
    }
}

impl FileDateTimeConfig {
    /// Convert to the domain format, checking the separators
    pub fn to_format(&self) -> Result<DateTimeFormat, ConfigurationError> {
        DateTimeFormat::new(
            self.date_format,
            single_char("date_separator", &self.date_separator)?,
            single_char("time_separator", &self.time_separator)?,
            self.date_time_separator.as_str(),
        )
    }
}

/// Raw tracer configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTracerConfig {
    /// Log file path
    pub path: Option<PathBuf>,
    /// Append to an existing file instead of truncating it
    pub append: bool,
    pub encoding: TextEncoding,
    /// Number entries (`<1> message`)
    pub entry_numbering: bool,
    /// Write CSV records instead of plain lines
    pub csv: bool,
    /// Level filter (`"info|warning"`, `"all"`, `"none"`)
    pub levels: LevelSet,
    /// Include the `[LEVEL]` tag in each entry
    pub include_level: bool,
    /// Flush after every entry
    pub auto_flush: bool,
    pub date_time: FileDateTimeConfig,
}

impl Default for FileTracerConfig {
    fn default() -> Self {
        Self {
            path: None,
            append: true,
            encoding: TextEncoding::default(),
            entry_numbering: false,
            csv: false,
            levels: LevelSet::ALL,
            include_level: true,
            auto_flush: false,
            date_time: FileDateTimeConfig::default(),
        }
    }
}

impl FileTracerConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.levels.validate_filter()?;
        self.date_time.to_format()?;
        Ok(())
    }

    /// Convert to tracer options
    pub fn to_options(&self) -> Result<TracerOptions, ConfigurationError> {
        Ok(TracerOptions::new()
            .with_entry_numbering(self.entry_numbering)
            .with_csv_format(self.csv)
            .with_level_filter(self.levels.validate_filter()?)
            .with_date_time_format(self.date_time.to_format()?)
            .with_encoding(self.encoding)
            .with_include_level(self.include_level)
            .with_auto_flush(self.auto_flush))
    }

    /// Open the configured log file
    pub fn open_tracer(&self) -> Result<FileTracer, TracerError> {
        let path = self.path.as_ref().ok_or(ConfigurationError::MissingTarget)?;
        open_log_tracer(path, self.append, self.to_options()?)
    }
}

fn single_char(field: &'static str, value: &str) -> Result<char, ConfigurationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigurationError::InvalidSeparator {
            field,
            value: value.to_string(),
        }),
    }
}
