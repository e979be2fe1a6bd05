use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Presentation settings for the bar, loadable from TOML.
///
/// Every field has a sane default; a config file only needs the fields it
/// wants to change.
///
/// # Example
/// ```
/// use qb_core::config::BarConfig;
/// let config = BarConfig::default();
/// assert_eq!(config.left_delimiter, "|");
/// assert_eq!(config.interval_ms, 1000);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct BarConfig {
    /// Printed immediately before the bar.
    pub left_delimiter: String,
    /// Printed immediately after the bar.
    pub right_delimiter: String,
    /// Refresh period in watch mode, milliseconds.
    pub interval_ms: u64,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            left_delimiter: "|".to_string(),
            right_delimiter: "|".to_string(),
            interval_ms: 1000,
        }
    }
}

/// Load a [`BarConfig`] from a TOML file.
///
/// # Errors
/// Returns an error if the file does not exist or does not parse as TOML.
pub fn load_config(path: &Path) -> Result<BarConfig> {
    if !path.exists() {
        return Err(CoreError::FileNotFound {
            path: path.display().to_string(),
        }
        .into());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: BarConfig = toml::from_str(&content)
        .map_err(|e| CoreError::Config(e.to_string()))
        .with_context(|| format!("parsing config {}", path.display()))?;
    if config.interval_ms == 0 {
        return Err(CoreError::Config("interval_ms must be > 0".to_string()).into());
    }
    log::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: BarConfig = toml::from_str("left_delimiter = \"[\"").unwrap();
        assert_eq!(config.left_delimiter, "[");
        assert_eq!(config.right_delimiter, "|");
        assert_eq!(config.interval_ms, 1000);
    }

    #[test]
    fn empty_toml_is_the_default() {
        let config: BarConfig = toml::from_str("").unwrap();
        assert_eq!(config.left_delimiter, "|");
        assert_eq!(config.interval_ms, 1000);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Path::new("/nonexistent/quadbar.toml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
