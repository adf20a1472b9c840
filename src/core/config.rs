//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.picklist/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PicklistConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub marker: Option<String>,
    pub shuffle_label: Option<String>,
    pub transition_ms: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Numbers";
pub const DEFAULT_MARKER: &str = "✓";
pub const DEFAULT_SHUFFLE_LABEL: &str = "Shuffle";
pub const DEFAULT_TRANSITION_MS: u64 = 350;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub title: String,
    pub marker: String,
    pub shuffle_label: String,
    pub transition: Duration,
    /// `None` seeds the shuffle RNG from the OS.
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&PicklistConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.picklist/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".picklist").join("config.toml"))
}

/// Load config from `explicit` if given, otherwise from the default path.
///
/// A missing default file is generated and treated as empty. A missing
/// explicit file is an I/O error: the user asked for it by name.
pub fn load_config(explicit: Option<&Path>) -> Result<PicklistConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PicklistConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PicklistConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<PicklistConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: PicklistConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Picklist Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Numbers"
# seed = 42                 # Fixed shuffle order. Or PICKLIST_SEED / --seed
# log_level = "debug"       # "off", "error", "warn", "info", "debug", "trace"

# [display]
# marker = "✓"              # Shown after selected rows
# shuffle_label = "Shuffle"
# transition_ms = 350       # How long changed rows stay highlighted
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &PicklistConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// [`resolve`] with the environment lookup supplied by the caller.
///
/// A value that fails to parse at one layer is logged and the next layer
/// down is used, so a typo in an env var never hides the config file.
pub fn resolve_with_env<E>(config: &PicklistConfig, cli: &CliOverrides, env: E) -> ResolvedConfig
where
    E: Fn(&str) -> Option<String>,
{
    // Seed: CLI → env → config → OS entropy
    let seed = cli
        .seed
        .or_else(|| env("PICKLIST_SEED").and_then(|raw| parse_seed("PICKLIST_SEED", &raw)))
        .or(config.general.seed);

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .as_deref()
        .and_then(parse_level)
        .or_else(|| env("PICKLIST_LOG").and_then(|raw| parse_level(&raw)))
        .or_else(|| config.general.log_level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    let marker = config
        .display
        .marker
        .clone()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MARKER.to_string());

    ResolvedConfig {
        title: config
            .general
            .title
            .clone()
            .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
        marker,
        shuffle_label: config
            .display
            .shuffle_label
            .clone()
            .unwrap_or_else(|| DEFAULT_SHUFFLE_LABEL.to_string()),
        transition: Duration::from_millis(
            config
                .display
                .transition_ms
                .unwrap_or(DEFAULT_TRANSITION_MS),
        ),
        seed,
        log_level,
    }
}

fn parse_seed(key: &str, raw: &str) -> Option<u64> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", key, raw, e);
            None
        }
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().parse() {
        Ok(filter) => Some(filter),
        Err(_) => {
            warn!("Unknown log level {:?}, ignoring", level);
            None
        }
    }
}
