//! Configuration file loading for log-tracer
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `LOG_TRACER_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./log-tracer.toml` or `./.log-tracer.toml`
//! 4. Global config: `$XDG_CONFIG_HOME/log-tracer/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileDateTimeConfig, FileTracerConfig};
pub use loader::ConfigLoader;
