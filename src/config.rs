//! Configuration loading.
//!
//! `~/.namecast/config.toml`, all fields optional, with environment
//! variables taking precedence over the file. A malformed file degrades to
//! defaults with a warning instead of aborting the command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::error::{NamecastError, Result};

/// Default prediction API base.
pub const DEFAULT_API_BASE: &str = "https://api.genderize.io";

/// Default notice visibility in milliseconds.
const DEFAULT_NOTICE_TIMEOUT_MS: u64 = 3000;

/// Runtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prediction API base URL.
    pub api_base: String,
    /// Saved-name store location. Defaults to `~/.namecast/names.json`.
    pub store_path: Option<PathBuf>,
    /// How long notices stay visible, in milliseconds.
    pub notice_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            store_path: None,
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Configuration directory, `~/.namecast`.
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".namecast")
    }

    /// Configuration file path, `~/.namecast/config.toml`.
    pub fn path() -> PathBuf {
        Self::dir().join("config.toml")
    }

    /// Load the configuration: file if present, then env overrides.
    pub fn load() -> Self {
        let mut config = match Self::load_from_path(&Self::path()) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Self::default()
            }
        };
        config.apply_env_overrides();
        config
    }

    /// Parse the configuration file at `path`. A missing file is not an
    /// error; it yields the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(NamecastError::Config(format!(
                    "failed to read {:?}: {}",
                    path, e
                )))
            }
        };
        toml::from_str(&data)
            .map_err(|e| NamecastError::Config(format!("failed to parse {:?}: {}", path, e)))
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(base) = std::env::var("NAMECAST_API_BASE") {
            if !base.is_empty() {
                self.api_base = base;
            }
        }
        if let Ok(path) = std::env::var("NAMECAST_STORE_PATH") {
            if !path.is_empty() {
                self.store_path = Some(PathBuf::from(path));
            }
        }
    }

    /// Resolved saved-name store file.
    pub fn store_file(&self) -> PathBuf {
        self.store_path
            .clone()
            .unwrap_or_else(|| Self::dir().join("names.json"))
    }

    /// Notice visibility as a [`Duration`].
    pub fn notice_timeout(&self) -> Duration {
        Duration::from_millis(self.notice_timeout_ms)
    }
}
