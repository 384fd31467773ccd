//! CLI entrypoint for log-tracer
//!
//! This is the main binary that wires together all layers: configuration
//! loading, the file target and the tracer use case.

mod cli;

use anyhow::{Result, anyhow};
use clap::Parser;
use cli::Cli;
use log_tracer_domain::LevelSet;
use log_tracer_infrastructure::{ConfigLoader, TracingObserver};
use std::io::BufRead;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize diagnostics based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let (stderr, _guard) = tracing_appender::non_blocking(std::io::stderr());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    cli.apply_to(&mut config)?;
    config.validate()?;
    debug!(?config, "Resolved configuration");

    let mut tracer = config
        .open_tracer()?
        .with_observer(TracingObserver::named("log-tracer"));
    let level = LevelSet::from(cli.level);

    if cli.messages.is_empty() {
        for line in std::io::stdin().lock().lines() {
            tracer.write(level, line?.as_str())?;
        }
    } else {
        for message in &cli.messages {
            tracer.write(level, message.as_str())?;
        }
    }

    info!(
        entries = tracer.entry_number(),
        path = ?tracer.path(),
        "Finished writing"
    );
    tracer.close_and_delete(cli.delete)?;

    Ok(())
}
