//! Error types and Result alias
//!
//! The engine itself has no recoverable-error path: unknown commands are
//! ordinary output, boundary conditions are silent no-ops. Everything here
//! belongs to the ambient layers that can genuinely fail, which is the
//! configuration machinery.

use std::fmt;
use std::path::PathBuf;

/// Result type alias for termfolio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for termfolio
#[derive(Debug)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to save configuration file
    ConfigSaveFailed { path: PathBuf, reason: String },

    /// No configuration file found in any search path
    ConfigNotFound,

    /// Failed to parse configuration
    ConfigParseFailed { format: String, reason: String },

    /// Configuration validation failed
    ConfigValidationFailed { field: String, reason: String },

    // === I/O and serialization wrappers ===
    /// I/O errors
    Io(std::io::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    /// JSON parsing errors
    Serde(serde_json::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors for cases not yet categorized
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigSaveFailed { path, reason } => {
                write!(f, "Failed to save config to '{}': {}", path.display(), reason)
            }
            Error::ConfigNotFound => {
                write!(f, "Configuration file not found")
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Serde(err) => write!(f, "JSON parsing error: {}", err),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
