//! Log tracer use case
//!
//! Filters, formats and writes log entries, one line per accepted call.
//!
//! # Write flow
//!
//! 1. A disabled filter (`NONE`) or a `NONE` entry level is a silent no-op.
//! 2. The entry level must be exactly one concrete level.
//! 3. Blank messages are replaced with [`EMPTY_MESSAGE_PLACEHOLDER`].
//! 4. Levels outside the filter are dropped silently.
//! 5. Emitted entries bump the counter, are written as one line and are
//!    reported to the registered [`TraceObserver`].
//!
//! A tracer is not synchronized: callers sharing one across threads must
//! serialize access themselves (e.g. behind a `Mutex`).
//!
//! [`EMPTY_MESSAGE_PLACEHOLDER`]: log_tracer_domain::EMPTY_MESSAGE_PLACEHOLDER

mod encoded_writer;
mod target;

pub use encoded_writer::EncodedWriter;
pub use target::TraceTarget;

use crate::config::TracerOptions;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::trace_observer::{NoTraceObserver, TraceEvent, TraceObserver};
use log_tracer_domain::entry::normalize_message;
use log_tracer_domain::{
    ArgumentError, DateTimeFormat, EntryFields, EntryLayout, LevelSet, TextEncoding, TracerError,
};
use std::any::Any;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Leveled, optionally numbered line logger over a writer.
pub struct LogTracer<W: Write> {
    writer: EncodedWriter<W>,
    owned_path: Option<PathBuf>,
    level_filter: LevelSet,
    date_time_format: DateTimeFormat,
    entry_number: u32,
    entry_numbering: bool,
    layout: EntryLayout,
    include_level: bool,
    clock: Box<dyn Clock>,
    observer: Box<dyn TraceObserver>,
}

impl<W: Write> LogTracer<W> {
    /// Build a tracer over `target`.
    ///
    /// Fails with a configuration error when the level filter combines
    /// `NONE` with other levels.
    pub fn new(target: TraceTarget<W>, options: TracerOptions) -> Result<Self, TracerError> {
        let level_filter = options.level_filter.validate_filter()?;

        let mut writer = EncodedWriter::new(target.writer, options.encoding, target.fresh);
        writer.set_auto_flush(options.auto_flush)?;

        Ok(Self {
            writer,
            owned_path: target.owned_path,
            level_filter,
            date_time_format: options.date_time_format,
            entry_number: 0,
            entry_numbering: options.entry_numbering,
            layout: EntryLayout::from_csv_flag(options.csv_format),
            include_level: options.include_level,
            clock: Box::new(SystemClock),
            observer: Box::new(NoTraceObserver),
        })
    }

    /// Build a tracer over a caller-supplied writer
    pub fn with_writer(writer: W, options: TracerOptions) -> Result<Self, TracerError> {
        Self::new(TraceTarget::supplied(writer), options)
    }

    /// Replace the clock used for timestamps
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Register an observer at construction
    pub fn with_observer(mut self, observer: impl TraceObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn set_observer(&mut self, observer: Box<dyn TraceObserver>) {
        self.observer = observer;
    }

    // ==================== Writing ====================

    /// Write one entry.
    ///
    /// `message` accepts a `&str` or an `Option<&str>`; `None` is rejected.
    pub fn write<'a>(
        &mut self,
        level: LevelSet,
        message: impl Into<Option<&'a str>>,
    ) -> Result<(), TracerError> {
        if self.level_filter == LevelSet::NONE || level.contains(LevelSet::NONE) {
            return Ok(());
        }

        if level.contains(LevelSet::ALL) {
            return Err(ArgumentError::AggregateLevel.into());
        }
        if !level.is_single() {
            return Err(ArgumentError::MultipleLevels(level).into());
        }

        let message = message.into().ok_or(ArgumentError::MissingMessage)?;
        let message = normalize_message(message);

        if self.level_filter == LevelSet::ALL || self.level_filter.contains(level) {
            self.emit(level, message)
        } else {
            trace!(%level, filter = %self.level_filter, "Entry filtered out");
            Ok(())
        }
    }

    pub fn info(&mut self, message: &str) -> Result<(), TracerError> {
        self.write(LevelSet::INFO, message)
    }

    pub fn debug(&mut self, message: &str) -> Result<(), TracerError> {
        self.write(LevelSet::DEBUG, message)
    }

    pub fn warning(&mut self, message: &str) -> Result<(), TracerError> {
        self.write(LevelSet::WARNING, message)
    }

    pub fn error(&mut self, message: &str) -> Result<(), TracerError> {
        self.write(LevelSet::ERROR, message)
    }

    fn emit(&mut self, level: LevelSet, message: &str) -> Result<(), TracerError> {
        let number = self.entry_number.wrapping_add(1);
        let timestamp = self.date_time_format.format_at(&self.clock.now());
        let fields = EntryFields {
            timestamp: &timestamp,
            level: self.include_level.then_some(level),
            number: self.entry_numbering.then_some(number),
            message,
        };
        let line = self.layout.render(&fields);

        // The counter only moves once the line reached the writer
        self.writer.write_line(&line)?;
        self.entry_number = number;

        self.observer.on_event(&TraceEvent {
            level,
            number,
            line: &line,
        });
        Ok(())
    }

    /// Forward a caller-defined payload to the observer's `on_custom` hook
    pub fn notify<T: Any>(&self, payload: &T) {
        self.observer.on_custom(payload);
    }

    // ==================== Lifecycle ====================

    pub fn flush(&mut self) -> Result<(), TracerError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and release the writer
    pub fn close(self) -> Result<(), TracerError> {
        self.close_and_delete(false)
    }

    /// Flush and release the writer, then delete the backing file if asked.
    ///
    /// Deletion only applies to tracers that own their path; for a supplied
    /// writer the request is ignored.
    pub fn close_and_delete(mut self, delete_file: bool) -> Result<(), TracerError> {
        self.writer.flush()?;
        let owned_path = self.owned_path.take();
        drop(self);

        match owned_path {
            Some(path) if delete_file => {
                std::fs::remove_file(&path)?;
                debug!(path = %path.display(), "Closed tracer and deleted log file");
            }
            None if delete_file => {
                debug!("Closed tracer; delete ignored for a supplied writer");
            }
            _ => debug!("Closed tracer"),
        }
        Ok(())
    }

    /// Flush and hand the writer back
    pub fn into_inner(mut self) -> Result<W, TracerError> {
        self.writer.flush()?;
        Ok(self.writer.into_inner())
    }

    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    // ==================== Properties ====================

    pub fn level_filter(&self) -> LevelSet {
        self.level_filter
    }

    /// Replace the level filter; `NONE` combined with other levels is rejected
    pub fn set_level_filter(&mut self, filter: LevelSet) -> Result<(), TracerError> {
        self.level_filter = filter.validate_filter()?;
        Ok(())
    }

    pub fn date_time_format(&self) -> &DateTimeFormat {
        &self.date_time_format
    }

    pub fn date_time_format_mut(&mut self) -> &mut DateTimeFormat {
        &mut self.date_time_format
    }

    pub fn set_date_time_format(&mut self, format: DateTimeFormat) {
        self.date_time_format = format;
    }

    pub fn include_level(&self) -> bool {
        self.include_level
    }

    pub fn set_include_level(&mut self, enabled: bool) {
        self.include_level = enabled;
    }

    pub fn auto_flush(&self) -> bool {
        self.writer.auto_flush()
    }

    pub fn set_auto_flush(&mut self, enabled: bool) -> Result<(), TracerError> {
        self.writer.set_auto_flush(enabled)?;
        Ok(())
    }

    pub fn encoding(&self) -> TextEncoding {
        self.writer.encoding()
    }

    pub fn entry_numbering(&self) -> bool {
        self.entry_numbering
    }

    pub fn csv_format(&self) -> bool {
        self.layout.is_csv()
    }

    /// Number of entries emitted so far
    pub fn entry_number(&self) -> u32 {
        self.entry_number
    }

    /// Backing file, when the tracer owns it
    pub fn path(&self) -> Option<&Path> {
        self.owned_path.as_deref()
    }

    pub fn owns_path(&self) -> bool {
        self.owned_path.is_some()
    }
}

impl<W: Write> fmt::Debug for LogTracer<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogTracer")
            .field("path", &self.owned_path)
            .field("level_filter", &self.level_filter)
            .field("entry_number", &self.entry_number)
            .field("entry_numbering", &self.entry_numbering)
            .field("layout", &self.layout)
            .field("include_level", &self.include_level)
            .field("encoding", &self.writer.encoding())
            .finish_non_exhaustive()
    }
}
