//! Application-level configuration.
//!
//! [`TracerOptions`] carries everything a tracer needs at construction,
//! independent of where the values came from (code, config file, CLI).

mod tracer_options;

pub use tracer_options::TracerOptions;
