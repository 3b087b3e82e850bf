//! Client configuration: store endpoint and fetch timeout.
//!
//! Loadable from a TOML file; every field has a default so a missing or
//! partial file still produces a working configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{StorageError, StorageResult};

/// Abort timeout for layout fetches, milliseconds.
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 12_000;

/// Settings for the layout-store client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the layout-storage API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Abort timeout applied to layout fetches, milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_FETCH_TIMEOUT_MS
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_timeout_ms: default_timeout_ms(),
        }
    }
}

impl StoreConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Default config file location under the user's config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("seatkit").join("store.toml"))
    }

    /// Loads settings from a TOML file. A missing file yields defaults.
    pub fn load(path: &Path) -> StorageResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| StorageError::Config {
            message: format!("reading {}: {e}", path.display()),
        })?;
        toml::from_str(&text).map_err(|e| StorageError::Config {
            message: format!("parsing {}: {e}", path.display()),
        })
    }

    /// Writes settings to a TOML file, creating parent directories.
    pub fn save(&self, path: &Path) -> StorageResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Config {
                message: format!("creating {}: {e}", parent.display()),
            })?;
        }
        let text = toml::to_string_pretty(self).map_err(|e| StorageError::Config {
            message: format!("serializing config: {e}"),
        })?;
        std::fs::write(path, text).map_err(|e| StorageError::Config {
            message: format!("writing {}: {e}", path.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = StoreConfig::load(Path::new("/nonexistent/store.toml")).unwrap();
        assert_eq!(config.fetch_timeout_ms, DEFAULT_FETCH_TIMEOUT_MS);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: StoreConfig = toml::from_str("base_url = \"https://api.example.com\"").unwrap();
        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.fetch_timeout_ms, 12_000);
    }

    #[test]
    fn round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        let config = StoreConfig {
            base_url: "https://store.test/api".to_string(),
            fetch_timeout_ms: 500,
        };
        config.save(&path).unwrap();
        let back = StoreConfig::load(&path).unwrap();
        assert_eq!(back.base_url, config.base_url);
        assert_eq!(back.fetch_timeout_ms, 500);
    }
}
