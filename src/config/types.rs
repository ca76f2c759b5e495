//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Checks that are never run, by name
    pub disable_checks: Vec<String>,

    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            disable_checks: Vec::new(),
            debug: false,
            log_path: default_log_path(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Disabled check names from the file followed by `extra`.
    pub fn disabled_with(&self, extra: &[String]) -> Vec<String> {
        self.disable_checks
            .iter()
            .chain(extra)
            .cloned()
            .collect()
    }
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("release-prep")
        })
        .join("logs")
}
