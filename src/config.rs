//! Runtime configuration
//!
//! Configuration is optional: the defaults reproduce the built-in detection
//! policy, and a TOML file can override the signal tables or the emitted
//! file names. The file is looked up from an explicit path first, then from
//! the `RAILYARD_CONFIG` environment variable.

use crate::detection::signals::SignalTables;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "RAILYARD_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RailyardConfig {
    pub signals: SignalTables,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Railway configuration file name, relative to the repository root.
    pub railway_file: String,
    /// Detection report file name, relative to the repository root.
    pub report_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            railway_file: "railway.toml".to_string(),
            report_file: ".monorepo-detection.json".to_string(),
        }
    }
}

impl RailyardConfig {
    /// Load configuration from an explicit path, from `RAILYARD_CONFIG`, or
    /// fall back to defaults when neither is set.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => std::env::var(CONFIG_ENV_VAR).ok().map(PathBuf::from),
        };

        match path {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
