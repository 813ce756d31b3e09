//! Dashboard configuration file support.
//!
//! This module provides utilities for reading dashboard configuration from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{DashboardError, DashboardResult};

/// Environment variable that overrides the configured data path.
pub const DATA_PATH_ENV: &str = "BIKESHARE_DATA_PATH";

/// Dashboard configuration from file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub data: DataSettings,
}

/// Data source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_path")]
    pub path: String,
}

fn default_data_path() -> String {
    "all_data.csv".to_string()
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

impl DashboardConfig {
    /// Load dashboard configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(DashboardConfig)` if successful
    /// * `Err(DashboardError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| DashboardError::DataLoad(format!("Failed to read config file: {}", e)))?;

        let config: DashboardConfig = toml::from_str(&content)
            .map_err(|e| DashboardError::DataLoad(format!("Failed to parse config file: {}", e)))?;

        Ok(config)
    }

    /// Load dashboard configuration from the default location.
    ///
    /// Searches for `dashboard_config.toml` in:
    /// 1. Current directory
    /// 2. `rust_backend/` directory
    /// 3. Parent directory
    ///
    /// A missing config file is not an error and yields the defaults; a
    /// config file that exists but fails to parse is.
    pub fn from_default_location() -> DashboardResult<Self> {
        let search_paths = vec![
            PathBuf::from("dashboard_config.toml"),
            PathBuf::from("rust_backend/dashboard_config.toml"),
            PathBuf::from("../dashboard_config.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the data file path, honoring the environment override.
    ///
    /// `BIKESHARE_DATA_PATH` wins over the configured `[data] path`, which in
    /// turn wins over the built-in default.
    pub fn data_path(&self) -> PathBuf {
        std::env::var(DATA_PATH_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(&self.data.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[data]
path = "data/rentals.csv"
"#;

        let config: DashboardConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data.path, "data/rentals.csv");
    }

    #[test]
    fn test_missing_section_uses_defaults() {
        let config: DashboardConfig = toml::from_str("").unwrap();
        assert_eq!(config.data.path, "all_data.csv");
    }

    #[test]
    fn test_missing_path_uses_default() {
        let toml = r#"
[data]
"#;

        let config: DashboardConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.data.path, "all_data.csv");
    }

    #[test]
    fn test_malformed_config_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard_config.toml");
        std::fs::write(&path, "[data\npath = ").unwrap();

        let result = DashboardConfig::from_file(&path);
        assert!(result.is_err());
    }
}
