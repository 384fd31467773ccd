//! Destination of a tracer and who owns it.

use std::io::Write;
use std::path::PathBuf;

/// A writer plus the ownership tag the tracer needs on close.
///
/// A target opened for a path is *owned*: closing the tracer may delete the
/// file. A *supplied* writer belongs to the caller and is never deleted;
/// pass `&mut writer` to keep using it after the tracer is gone.
pub struct TraceTarget<W: Write> {
    pub(crate) writer: W,
    pub(crate) owned_path: Option<PathBuf>,
    pub(crate) fresh: bool,
}

impl<W: Write> TraceTarget<W> {
    /// Writer supplied by the caller
    pub fn supplied(writer: W) -> Self {
        Self {
            writer,
            owned_path: None,
            fresh: false,
        }
    }

    /// Writer opened on the tracer's behalf for `path`
    pub fn owned(writer: W, path: impl Into<PathBuf>) -> Self {
        Self {
            writer,
            owned_path: Some(path.into()),
            fresh: false,
        }
    }

    /// Mark the target as empty so a byte-order mark is written first
    pub fn with_fresh(mut self, fresh: bool) -> Self {
        self.fresh = fresh;
        self
    }
}
