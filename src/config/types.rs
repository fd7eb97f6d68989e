//! Configuration type definitions and defaults

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Default number of resources in the average report when none is given
    /// on the command line. Unset means no limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<usize>,
    /// Number of bar characters that represent 100% in the histogram
    #[serde(default = "default_histogram_width")]
    pub histogram_width: usize,
    /// chrono format string for histogram hour labels
    #[serde(default = "default_hour_format")]
    pub hour_format: String,
}

pub fn default_histogram_width() -> usize {
    100
}

pub fn default_hour_format() -> String {
    "%Y-%m-%d: %H".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top: None,
            histogram_width: default_histogram_width(),
            hour_format: default_hour_format(),
        }
    }
}

impl ReportConfig {
    /// Validate report settings
    pub fn validate(&self) -> Result<(), String> {
        if self.histogram_width == 0 {
            return Err("report.histogram_width must be > 0".to_string());
        }
        if self.hour_format.trim().is_empty() {
            return Err("report.hour_format must not be empty".to_string());
        }
        if StrftimeItems::new(&self.hour_format).any(|item| matches!(item, Item::Error)) {
            return Err(format!(
                "report.hour_format '{}' is not a valid strftime format",
                self.hour_format
            ));
        }
        // Offset and zone specifiers parse but cannot render a naive hour.
        let sample = NaiveDate::from_ymd_opt(2015, 8, 19).and_then(|d| d.and_hms_opt(10, 0, 0));
        if let Some(sample) = sample {
            let mut rendered = String::new();
            if write!(rendered, "{}", sample.format(&self.hour_format)).is_err() {
                return Err(format!(
                    "report.hour_format '{}' cannot format a local hour",
                    self.hour_format
                ));
            }
        }
        Ok(())
    }
}

/// Terminal output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Colorize report headers and histogram bars when writing to a terminal
    #[serde(default = "default_color")]
    pub color: bool,
}

pub fn default_color() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

/// Diagnostic logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level filter used when LOGSTAT_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

pub fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Validate the level name
    pub fn validate(&self) -> Result<(), String> {
        let valid = ["off", "error", "warn", "info", "debug", "trace"];
        if !valid.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Unknown log level '{}'. Valid: {}",
                self.level,
                valid.join(", ")
            ));
        }
        Ok(())
    }
}
