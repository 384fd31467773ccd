//! Construction-time options of a tracer.

use log_tracer_domain::{DateTimeFormat, LevelSet, TextEncoding};

/// Options applied when a tracer is built.
///
/// `entry_numbering`, `csv_format` and `encoding` are fixed for the lifetime
/// of the tracer; the other fields only seed properties that can be changed
/// afterwards.
#[derive(Debug, Clone)]
pub struct TracerOptions {
    /// Prefix entries with their sequence number
    pub entry_numbering: bool,
    /// Write entries as quoted CSV records instead of plain text
    pub csv_format: bool,
    /// Initial level filter (validated when the tracer is built)
    pub level_filter: LevelSet,
    pub date_time_format: DateTimeFormat,
    pub encoding: TextEncoding,
    /// Include the `[LEVEL]` tag in each entry
    pub include_level: bool,
    /// Flush the writer after every entry
    pub auto_flush: bool,
}

impl Default for TracerOptions {
    fn default() -> Self {
        Self {
            entry_numbering: false,
            csv_format: false,
            level_filter: LevelSet::NONE,
            date_time_format: DateTimeFormat::default(),
            encoding: TextEncoding::default(),
            include_level: true,
            auto_flush: false,
        }
    }
}

impl TracerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry_numbering(mut self, enabled: bool) -> Self {
        self.entry_numbering = enabled;
        self
    }

    pub fn with_csv_format(mut self, enabled: bool) -> Self {
        self.csv_format = enabled;
        self
    }

    pub fn with_level_filter(mut self, filter: LevelSet) -> Self {
        self.level_filter = filter;
        self
    }

    pub fn with_date_time_format(mut self, format: DateTimeFormat) -> Self {
        self.date_time_format = format;
        self
    }

    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_include_level(mut self, enabled: bool) -> Self {
        self.include_level = enabled;
        self
    }

    pub fn with_auto_flush(mut self, enabled: bool) -> Self {
        self.auto_flush = enabled;
        self
    }
}
