//! Port for wall-clock access.
//!
//! The tracer reads the current time through [`Clock`] so that timestamps
//! can be pinned in tests. [`SystemClock`] is the production implementation.

use chrono::{Local, NaiveDateTime};

/// Source of the local wall-clock time used for entry timestamps
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a fixed instant (tests and replays)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
