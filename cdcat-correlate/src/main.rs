//! cdcat-correlate - command-line front end for the correlation engine
//!
//! ```bash
//! cdcat-correlate normalize "Geogaddi (Remastered)"
//! cdcat-correlate score "Radiohead" "Raidohead" --threshold 0.8
//! cdcat-correlate check catalog.json [--json]
//! ```

use anyhow::{Context, Result};
use cdcat_common::config::load_config;
use cdcat_correlate::cli::{execute, Args};
use cdcat_correlate::Correlator;
use clap::Parser;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter};

/// Level used until the configuration file has been read
const BOOTSTRAP_LOG_LEVEL: &str = "info";

fn main() -> Result<()> {
    let args = Args::parse();

    // Tracing comes up before configuration so config resolution is logged.
    // RUST_LOG and --log-level pin the filter; otherwise it starts at the
    // bootstrap level and is swapped for the configured one below.
    let (filter, pinned) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => match &args.log_level {
            Some(level) => (
                EnvFilter::try_new(level)
                    .with_context(|| format!("Invalid log level '{}'", level))?,
                true,
            ),
            None => (EnvFilter::new(BOOTSTRAP_LOG_LEVEL), false),
        },
    };
    let (filter, filter_handle) = reload::Layer::new(filter);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    info!(
        "Starting cdcat-correlate v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let config = load_config(args.config.as_deref()).context("Failed to load configuration")?;

    if !pinned {
        let level = &config.logging.level;
        let configured = EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level '{}' in configuration", level))?;
        filter_handle
            .reload(configured)
            .context("Failed to apply configured log level")?;
    }

    info!(
        artist_threshold = config.matching.artist_threshold,
        title_threshold = config.matching.title_threshold,
        empty_fields = ?config.matching.empty_fields,
        "Matching configuration"
    );

    let correlator = Correlator::new(config.matching);
    let stdout = std::io::stdout();
    execute(&args.command, &correlator, &mut stdout.lock())
}
