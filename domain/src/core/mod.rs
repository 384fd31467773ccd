//! Core domain concepts shared across all subdomains.
//!
//! - [`error::TracerError`]: the error taxonomy (configuration, argument, storage)

pub mod error;
