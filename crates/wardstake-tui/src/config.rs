//! Persisted application configuration.
//!
//! A small JSON file in the user config directory holding the last-used
//! endpoints and validator, so the CLI flags are only needed once.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Configuration error type.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no config directory available")]
    NoConfigDir,
}

/// Theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeConfig {
    /// Follow the detected terminal background.
    #[default]
    System,
    Light,
    Dark,
}

/// Persisted application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Chain LCD base URL.
    #[serde(default)]
    pub lcd_url: Option<String>,
    /// Signer bridge base URL.
    #[serde(default)]
    pub signer_url: Option<String>,
    /// Last-used validator operator address.
    #[serde(default)]
    pub validator: Option<String>,
    /// Decimal places of the gateway's scaled APR rate.
    #[serde(default)]
    pub rate_decimals: Option<u32>,
    /// Theme preference.
    #[serde(default)]
    pub theme: ThemeConfig,
}

fn config_path() -> Result<PathBuf, ConfigError> {
    let dirs = ProjectDirs::from("", "", "wardstake").ok_or(ConfigError::NoConfigDir)?;
    Ok(dirs.config_dir().join("config.json"))
}

/// Load the configuration, falling back to defaults when the file does
/// not exist yet.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the configuration.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}
