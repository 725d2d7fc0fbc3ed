//! Command-line interface for cdcat-correlate
//!
//! Argument definitions and command execution live here so integration tests
//! can drive them without spawning the binary.

use crate::{normalize, reconcile, Correlator};
use anyhow::{Context, Result};
use cdcat_common::Catalog;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Fuzzy artist/album correlation for a CD catalog
#[derive(Parser, Debug)]
#[clap(name = "cdcat-correlate", version)]
#[clap(about = "Fuzzy artist/album correlation for a CD catalog")]
pub struct Args {
    /// Configuration file (overrides CDCAT_CONFIG and the per-user file)
    #[clap(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins if set
    #[clap(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Print the normalized form of a label
    Normalize {
        text: String,
    },

    /// Score two labels and report whether they match
    Score {
        a: String,
        b: String,

        /// Minimum similarity to call a match (default: configured artist threshold)
        #[clap(long)]
        threshold: Option<f64>,
    },

    /// Reconcile a catalog JSON file: wantlist satisfaction and missing albums
    Check {
        #[clap(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Print the report as JSON instead of text
        #[clap(long)]
        json: bool,
    },
}

/// Run one command, writing its output to `out`
///
/// # Errors
/// Returns error if the catalog cannot be loaded or output cannot be written.
pub fn execute(command: &Command, correlator: &Correlator, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Normalize { text } => {
            writeln!(out, "{}", normalize(text))?;
        }
        Command::Score { a, b, threshold } => {
            let threshold = threshold.unwrap_or(correlator.config().artist_threshold);
            let score = correlator.score(a, b);
            writeln!(out, "{:?} -> {:?}", a, normalize(a))?;
            writeln!(out, "{:?} -> {:?}", b, normalize(b))?;
            writeln!(out, "score: {:.3}", score)?;
            writeln!(
                out,
                "match: {} (threshold {:.2})",
                if score >= threshold { "yes" } else { "no" },
                threshold
            )?;
        }
        Command::Check { catalog, json } => {
            let loaded = Catalog::load(catalog)
                .with_context(|| format!("Failed to load catalog {}", catalog.display()))?;
            let report = reconcile(correlator, &loaded);

            if *json {
                let rendered =
                    serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
                writeln!(out, "{}", rendered)?;
            } else {
                write!(out, "{}", report)?;
            }
        }
    }

    Ok(())
}
