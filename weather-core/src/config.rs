use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::model::{DEFAULT_LOCATION, QueryRequest, Units};

/// Public YQL endpoint queried when the config does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://query.yahooapis.com/v1/public/yql";

/// Top-level configuration, optionally stored on disk.
///
/// Example TOML:
/// ```toml
/// endpoint = "https://query.yahooapis.com/v1/public/yql"
/// default_location = "jaeju"
/// units = "c"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub default_location: String,
    pub units: Units,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            units: Units::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist or no
    /// platform config directory can be resolved.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_file_path().as_deref())
    }

    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("no platform config directory, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file, if the platform has a config directory.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "yql-weather", "weather")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Request for `location`, or the configured default when absent.
    pub fn request_for(&self, location: Option<&str>) -> QueryRequest {
        let location = location.unwrap_or(&self.default_location);
        QueryRequest::new(location, self.units)
    }
}
