//! Configuration management for logstat

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

impl Config {
    /// Get the config file path (~/.config/logstat/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Check every section, returning the first problem found
    pub fn validate(&self) -> Result<(), String> {
        self.report.validate()?;
        self.logging.validate()
    }

    /// Resource limit for the average report.
    ///
    /// The command line value wins over `report.top`.
    pub fn resolve_top(&self, cli_top: Option<usize>) -> Option<usize> {
        cli_top.or(self.report.top)
    }
}
