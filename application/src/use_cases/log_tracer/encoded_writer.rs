//! Line writer applying the tracer's text encoding.

use log_tracer_domain::TextEncoding;
use std::io::{self, Write};

/// Wraps the destination writer; encodes each line and honors auto-flush.
pub struct EncodedWriter<W: Write> {
    inner: W,
    encoding: TextEncoding,
    auto_flush: bool,
    pending_preamble: bool,
    scratch: Vec<u8>,
}

impl<W: Write> EncodedWriter<W> {
    /// `write_preamble` requests the encoding's byte-order mark before the
    /// first line (only meaningful for an empty target).
    pub fn new(inner: W, encoding: TextEncoding, write_preamble: bool) -> Self {
        Self {
            inner,
            encoding,
            auto_flush: false,
            pending_preamble: write_preamble && !encoding.preamble().is_empty(),
            scratch: Vec::new(),
        }
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    pub fn auto_flush(&self) -> bool {
        self.auto_flush
    }

    /// Toggle auto-flush; enabling it flushes pending data immediately
    pub fn set_auto_flush(&mut self, enabled: bool) -> io::Result<()> {
        self.auto_flush = enabled;
        if enabled {
            self.inner.flush()?;
        }
        Ok(())
    }

    /// Write `line` followed by a line feed
    ///
    /// The byte-order mark is attempted at most once, even when the first
    /// write fails part way.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.pending_preamble {
            self.pending_preamble = false;
            self.inner.write_all(self.encoding.preamble())?;
        }

        self.scratch.clear();
        self.encoding.encode_into(line, &mut self.scratch);
        self.encoding.encode_into("\n", &mut self.scratch);
        self.inner.write_all(&self.scratch)?;

        if self.auto_flush {
            self.inner.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
