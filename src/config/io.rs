//! Configuration I/O operations

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Get the config file path (~/.config/logstat/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Get the config directory path (~/.config/logstat)
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("logstat"))
}

/// Load configuration from the default location, or return defaults if not found
pub fn load() -> Result<Config> {
    load_from(&config_path()?)
}

/// Load configuration from a specific file, or return defaults if it does not exist
pub fn load_from(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid config {:?}: {}", config_path, e))?;
    Ok(config)
}
