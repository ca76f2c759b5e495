//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;

/// Validate configuration.
///
/// Disabled names are only checked for shape here; whether they name a
/// registered check is decided when checks are filtered.
pub fn validate(config: &Config) -> Result<()> {
    if config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    for (i, name) in config.disable_checks.iter().enumerate() {
        if name.is_empty() {
            bail!("disable_checks[{}]: name cannot be empty", i);
        }
        if name.chars().any(char::is_whitespace) {
            bail!("disable_checks[{}]: name '{}' contains whitespace", i, name);
        }
    }

    Ok(())
}
