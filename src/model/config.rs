use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::category::Category;

/// Error loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Configuration from an optional TOML file passed via `--config`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Category tab to open with when `--category` is not given
    #[serde(default)]
    pub default_category: Option<Category>,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides (`"#RRGGBB"`), keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Config {
    /// Load the config from `path`, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_path_is_default() {
        let config = Config::load(None).unwrap();
        assert!(config.default_category.is_none());
        assert!(config.ui.colors.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dolist.toml");
        std::fs::write(
            &path,
            r##"default_category = "professional"

[ui.colors]
background = "#000000"
highlight = "#FB4196"
"##,
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.default_category, Some(Category::Professional));
        assert_eq!(
            config.ui.colors.get("background").map(String::as_str),
            Some("#000000")
        );
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dolist.toml");
        std::fs::write(&path, "default_category = 3").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
