//! Configuration service for loading and generating config files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::default_log_path_for_config_dir;
use super::Config;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    /// Always uses ~/.config/release-prep/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("release-prep")
            .join("config.toml")
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path and falls back to the
    /// default configuration when that file does not exist. An explicit
    /// path must exist.
    /// Log path defaults to the same directory as config file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let explicit = path.is_some();
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        if !path.exists() {
            if explicit {
                bail!("Config file not found: {}", path.display());
            }
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content, path.parent())
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Parse and validate configuration content found in `config_dir`.
    pub fn parse(content: &str, config_dir: Option<&Path>) -> Result<Config> {
        let mut config: Config = toml::from_str(content)?;

        // log_path left at the general default means it wasn't set in the file
        if config.log_path == default_log_path_for_config_dir(None) {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        config.validate()?;

        Ok(config)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, Self::default_config_content())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> &'static str {
        r#"# release-prep configuration file

# Checks that are never run (names as shown by `release-prep list`)
# Names given with --disable-checks are added to this list.
disable_checks = []

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# log_path = "~/.config/release-prep/logs"
"#
    }
}
