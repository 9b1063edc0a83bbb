//! Configuration
//!
//! TOML-first configuration for the session: who the prompt says you are,
//! how much history the ring keeps, and all the portfolio content. Every
//! struct has serde defaults so a partial file only overrides what it
//! names; a missing file falls back to defaults entirely.

pub mod loader;

pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};

use crate::content::Content;
use crate::error::{Error, Result};
use crate::history;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Session identity
    pub session: SessionConfig,

    /// History buffer sizing
    pub history: HistoryConfig,

    /// Banner, portfolio and neofetch text
    pub content: Content,
}

/// Identity shown in the prompt and by `whoami` / `neofetch`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub user: String,
    pub host: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            host: default_host(),
        }
    }
}

/// History ring sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Oldest entries are evicted past this cap
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: history::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl Config {
    /// Check invariants a file-sourced config could violate
    pub fn validate(&self) -> Result<()> {
        if self.session.user.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "session.user".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.session.host.trim().is_empty() {
            return Err(Error::ConfigValidationFailed {
                field: "session.host".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.history.max_entries == 0 {
            return Err(Error::ConfigValidationFailed {
                field: "history.max_entries".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Login name from the environment, or a guest fallback
fn default_user() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "guest".to_string())
}

/// Machine hostname, or a fixed fallback
fn default_host() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "portfolio".to_string())
}
