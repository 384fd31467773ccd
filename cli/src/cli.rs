//! CLI command definitions

use clap::{Parser, ValueEnum};
use log_tracer_domain::{ConfigurationError, LevelSet};
use log_tracer_infrastructure::FileTracerConfig;
use std::path::PathBuf;

/// Level of the entries written by one invocation
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EntryLevel {
    Info,
    Debug,
    Warning,
    Error,
}

impl From<EntryLevel> for LevelSet {
    fn from(level: EntryLevel) -> Self {
        match level {
            EntryLevel::Info => LevelSet::INFO,
            EntryLevel::Debug => LevelSet::DEBUG,
            EntryLevel::Warning => LevelSet::WARNING,
            EntryLevel::Error => LevelSet::ERROR,
        }
    }
}

/// CLI arguments for log-tracer
#[derive(Parser, Debug)]
#[command(name = "log-tracer")]
#[command(author, version, about = "Append leveled, timestamped entries to a log file")]
#[command(long_about = r#"
log-tracer appends one line per message to a log file, prefixed with a
timestamp and optionally with the level and a running entry number.

Messages given as arguments are written in order. Without arguments every
line read from stdin becomes one entry.

Configuration files are loaded from (in priority order):
1. LOG_TRACER_* environment variables
2. --config <path>          Explicit config file
3. ./log-tracer.toml        Project-level config
4. ~/.config/log-tracer/config.toml   Global config

Example:
  log-tracer --file app.log "service started"
  log-tracer --file app.log --level warning --numbering "disk low"
  tail -f build.out | log-tracer --file build.log --csv
"#)]
pub struct Cli {
    /// Messages to log (stdin lines when omitted)
    pub messages: Vec<String>,

    /// Log file path (overrides `path` from the config)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Level of the written entries
    #[arg(short, long, value_enum, default_value = "info")]
    pub level: EntryLevel,

    /// Level filter, e.g. "info|error", "all" or "none"
    #[arg(long, value_name = "LEVELS")]
    pub filter: Option<String>,

    /// Append to an existing file
    #[arg(long, conflicts_with = "truncate")]
    pub append: bool,

    /// Truncate an existing file
    #[arg(long)]
    pub truncate: bool,

    /// Number entries
    #[arg(short, long)]
    pub numbering: bool,

    /// Write CSV records
    #[arg(long)]
    pub csv: bool,

    /// Leave the [LEVEL] tag out of entries
    #[arg(long)]
    pub no_level: bool,

    /// Flush after every entry
    #[arg(long)]
    pub auto_flush: bool,

    /// Delete the log file once done
    #[arg(long)]
    pub delete: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration
    pub fn apply_to(&self, config: &mut FileTracerConfig) -> Result<(), ConfigurationError> {
        if let Some(file) = &self.file {
            config.path = Some(file.clone());
        }
        if let Some(filter) = &self.filter {
            config.levels = filter.parse()?;
        }
        if self.append {
            config.append = true;
        }
        if self.truncate {
            config.append = false;
        }
        config.entry_numbering |= self.numbering;
        config.csv |= self.csv;
        config.auto_flush |= self.auto_flush;
        if self.no_level {
            config.include_level = false;
        }
        Ok(())
    }
}
