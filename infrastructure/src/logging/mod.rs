//! Logging infrastructure: diagnostics hooks for tracers.
//!
//! Provides [`TracingObserver`], a [`TraceObserver`](log_tracer_application::TraceObserver)
//! that forwards emitted entries to `tracing`.

mod tracing_observer;

pub use tracing_observer::TracingObserver;
