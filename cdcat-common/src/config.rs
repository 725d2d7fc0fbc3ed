//! Configuration loading
//!
//! Configuration file resolution priority:
//! 1. Command-line argument (highest priority)
//! 2. `CDCAT_CONFIG` environment variable
//! 3. `<config_dir>/cdcat/config.toml`
//! 4. Compiled defaults (fallback)
//!
//! A file named explicitly (1 or 2) must exist and parse. The per-user file (3)
//! is optional: absent means compiled defaults, malformed means a warning and
//! compiled defaults.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming an explicit configuration file
pub const CONFIG_ENV_VAR: &str = "CDCAT_CONFIG";

/// Default threshold for artist-name agreement
pub const DEFAULT_ARTIST_THRESHOLD: f64 = 0.8;

/// Default threshold for album-title agreement
///
/// Titles vary more than artist names and a false "already owned" verdict is
/// costlier, so the bar is higher.
pub const DEFAULT_TITLE_THRESHOLD: f64 = 0.9;

/// Complete configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Correlation thresholds and policies (optional)
    #[serde(default)]
    pub matching: MatchingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// How a pair of fields that are empty after normalization is judged
///
/// The raw engine treats two empty labels as identical (score 1.0). That is
/// rarely what a caller wants when a required field was simply left blank, so
/// the decision is made here, per caller, instead of inside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyFieldPolicy {
    /// Two empty fields are identical by vacuity and match
    Vacuous,
    /// An empty field never matches anything, not even another empty field
    #[default]
    Never,
}

/// Correlation thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum similarity for two artist names to be considered the same
    #[serde(default = "default_artist_threshold")]
    pub artist_threshold: f64,

    /// Minimum similarity for two album titles to be considered the same
    #[serde(default = "default_title_threshold")]
    pub title_threshold: f64,

    #[serde(default)]
    pub empty_fields: EmptyFieldPolicy,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            artist_threshold: DEFAULT_ARTIST_THRESHOLD,
            title_threshold: DEFAULT_TITLE_THRESHOLD,
            empty_fields: EmptyFieldPolicy::default(),
        }
    }
}

fn default_artist_threshold() -> f64 {
    DEFAULT_ARTIST_THRESHOLD
}

fn default_title_threshold() -> f64 {
    DEFAULT_TITLE_THRESHOLD
}

impl MatchingConfig {
    /// Check that both thresholds lie in [0, 1]
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("artist_threshold", self.artist_threshold),
            ("title_threshold", self.title_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::Config(format!(
                    "matching.{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl TomlConfig {
    /// Parse and validate configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        config.matching.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }
}

/// Per-user configuration file location (`~/.config/cdcat/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cdcat").join("config.toml"))
}

/// Resolve and load configuration following the priority order above
///
/// # Arguments
/// * `cli_path` - Configuration file named on the command line, if any
///
/// # Errors
/// Returns error if an explicitly named file (argument or environment) is
/// missing, unparseable, or carries out-of-range thresholds.
pub fn load_config(cli_path: Option<&Path>) -> Result<TomlConfig> {
    // Priority 1: Command-line argument
    if let Some(path) = cli_path {
        info!("Loading configuration from {} (command line)", path.display());
        return TomlConfig::load(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            let path = PathBuf::from(path);
            info!("Loading configuration from {} ({})", path.display(), CONFIG_ENV_VAR);
            return TomlConfig::load(&path);
        }
    }

    // Priority 3: Per-user config file
    if let Some(path) = default_config_path() {
        if path.exists() {
            match TomlConfig::load(&path) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    return Ok(config);
                }
                Err(e) => {
                    warn!("Ignoring config file {}: {}; using defaults", path.display(), e);
                    return Ok(TomlConfig::default());
                }
            }
        }
    }

    // Priority 4: Compiled defaults
    debug!("No configuration file found, using compiled defaults");
    Ok(TomlConfig::default())
}
