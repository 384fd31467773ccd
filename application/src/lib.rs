//! Application layer for log-tracer
//!
//! This crate contains the tracer use case, its options and the ports it
//! depends on. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TracerOptions;
pub use ports::{
    clock::{Clock, FixedClock, SystemClock},
    trace_observer::{NoTraceObserver, TraceEvent, TraceObserver},
};
pub use use_cases::log_tracer::{EncodedWriter, LogTracer, TraceTarget};
