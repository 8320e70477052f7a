//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.safe-eat/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::ResourceId;
use crate::api::client::DEFAULT_BASE_URL;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SafeEatConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Product opened from the home menu.
    pub featured_product: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_FEATURED_PRODUCT: &str = "649f54ad6665ea2c2dede4ee";
pub const DEFAULT_LOG_FILE: &str = "safe-eat.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_base_url: String,
    pub featured_product: ResourceId,
    pub log_file: PathBuf,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.safe-eat/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".safe-eat").join("config.toml"))
}

/// Load config from `~/.safe-eat/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SafeEatConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SafeEatConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SafeEatConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<SafeEatConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SafeEatConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SafeEatConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# SafeEat Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [api]
# base_url = "http://localhost:8080"       # Or set SAFE_EAT_API_URL

# [general]
# featured_product = "649f54ad6665ea2c2dede4ee"   # Or set SAFE_EAT_PRODUCT
# log_file = "safe-eat.log"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_api_url` and `cli_product` are from CLI flags (None = not specified).
pub fn resolve(
    config: &SafeEatConfig,
    cli_api_url: Option<&str>,
    cli_product: Option<&str>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let api_base_url = cli_api_url
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SAFE_EAT_API_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Featured product: CLI → env → config → default, skipping blank values
    let featured_product = [
        cli_product.map(|s| s.to_string()),
        std::env::var("SAFE_EAT_PRODUCT").ok(),
        config.general.featured_product.clone(),
    ]
    .into_iter()
    .flatten()
    .find_map(|raw| {
        let id = ResourceId::parse(raw.trim());
        if id.is_none() {
            warn!("Ignoring blank featured product id");
        }
        id
    })
    .unwrap_or_else(default_featured_product);

    let log_file = config
        .general
        .log_file
        .as_deref()
        .unwrap_or(DEFAULT_LOG_FILE)
        .into();

    ResolvedConfig {
        api_base_url,
        featured_product,
        log_file,
    }
}

fn default_featured_product() -> ResourceId {
    ResourceId::parse(DEFAULT_FEATURED_PRODUCT)
        .unwrap_or_else(|| unreachable!("default product id is non-empty"))
}
