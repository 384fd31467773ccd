//! Observer mirroring emitted entries into `tracing`.
//!
//! Useful when a tracer's file output should also show up in the process
//! diagnostics (e.g. the CLI's `-vv` mode).

use log_tracer_application::{TraceEvent, TraceObserver};
use std::any::Any;
use tracing::debug;

/// Emits a `debug` event for every entry written by the tracer.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    /// Name of the tracer, attached to every event
    name: Option<String>,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    fn tracer_name(&self) -> &str {
        self.name.as_deref().unwrap_or("log-tracer")
    }
}

impl TraceObserver for TracingObserver {
    fn on_event(&self, event: &TraceEvent<'_>) {
        debug!(
            tracer = self.tracer_name(),
            level = %event.level,
            number = event.number,
            "{}",
            event.line
        );
    }

    fn on_custom(&self, payload: &dyn Any) {
        if let Some(text) = payload.downcast_ref::<String>() {
            debug!(tracer = self.tracer_name(), "{}", text);
        } else if let Some(text) = payload.downcast_ref::<&str>() {
            debug!(tracer = self.tracer_name(), "{}", text);
        }
    }
}
