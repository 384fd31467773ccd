//! Port for observing tracer activity.
//!
//! A [`TraceObserver`] registered on a tracer is told about every entry that
//! is actually written. Both hooks default to no-ops, so an observer only
//! implements what it cares about.

use log_tracer_domain::LevelSet;
use std::any::Any;

/// An entry that has just been written
#[derive(Debug, Clone, Copy)]
pub struct TraceEvent<'a> {
    /// Level of the entry (always a single level)
    pub level: LevelSet,
    /// Entry counter after this entry was emitted
    pub number: u32,
    /// The formatted line, without terminator
    pub line: &'a str,
}

/// Callback interface invoked by the tracer.
pub trait TraceObserver: Send {
    /// Called after each emitted entry
    fn on_event(&self, _event: &TraceEvent<'_>) {}

    /// Called with caller-defined payloads passed to `LogTracer::notify`
    fn on_custom(&self, _payload: &dyn Any) {}
}

/// No-op observer used when none is registered
pub struct NoTraceObserver;

impl TraceObserver for NoTraceObserver {}
