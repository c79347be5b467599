use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.example.com/send-email";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings of the outbound call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormBuilderConfig {
    pub endpoint: Url,
    pub timeout_secs: u64,
}

impl Default for FormBuilderConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

impl FormBuilderConfig {
    /// Reads a TOML file, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.check()?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Applies explicit overrides (flags or environment) on top.
    pub fn with_overrides(
        mut self,
        endpoint: Option<Url>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }
        if let Some(timeout_secs) = timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        self.check()?;
        Ok(self)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
