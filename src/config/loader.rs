//! Configuration file loading
//!
//! Finds, parses and saves configuration files. TOML is the primary format
//! with JSON as an alternative; the format is chosen by file extension.
//! Search order: explicit path, then the platform config directory, then a
//! dotfile directory in `$HOME`, then the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Config;
use crate::error::{Error, Result};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from a path's extension; TOML when in doubt
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }
}

/// Configuration file loader
pub struct ConfigLoader {
    /// Candidate configuration paths, highest priority first
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            search_paths: Self::search_paths(),
        }
    }

    /// Load from the first configuration file found, or defaults
    ///
    /// A malformed file is an error; a missing file is not.
    pub fn load() -> Result<Config> {
        let loader = Self::new();
        for path in &loader.search_paths {
            if path.is_file() {
                debug!("loading config from {}", path.display());
                return Self::load_from_file(path);
            }
        }
        debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    /// Load and validate a specific configuration file
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path).map_err(|e| Error::ConfigLoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Config = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => toml::from_str(&raw).map_err(|e| Error::ConfigParseFailed {
                format: "TOML".to_string(),
                reason: e.to_string(),
            })?,
            ConfigFormat::Json => {
                serde_json::from_str(&raw).map_err(|e| Error::ConfigParseFailed {
                    format: "JSON".to_string(),
                    reason: e.to_string(),
                })?
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize a configuration to `path` in the format its extension names
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let serialized = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => {
                toml::to_string_pretty(config).map_err(|e| Error::ConfigSaveFailed {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
            }
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        };

        fs::write(path, serialized).map_err(|e| Error::ConfigSaveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Candidate config locations, highest priority first
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("termfolio").join("config.toml"));
            paths.push(config_dir.join("termfolio").join("config.json"));
        } else {
            warn!("no platform config directory available");
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".termfolio").join("config.toml"));
        }

        paths.push(PathBuf::from("termfolio.toml"));
        paths
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
