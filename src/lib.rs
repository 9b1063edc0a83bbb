//! Termfolio - a simulated interactive shell for a terminal portfolio
//!
//! This library provides the line-editing and command dispatch engine
//! behind Termfolio. It is a simulated shell: no process is ever spawned
//! and no PTY is opened. A closed set of built-in commands renders
//! portfolio content to whatever display surface the host wires in.
//!
//! ## Features
//!
//! - **Line Editing:** Character echo, backspace, Ctrl-C, Ctrl-L
//! - **History:** Bounded ring with Up/Down recall
//! - **Tab Completion:** Prefix completion over the command registry
//! - **Command Dispatch:** Lowercased first token against a closed registry
//! - **Configuration:** TOML/JSON config files with sane defaults
//!
//! ## Module Organization
//!
//! - [`session`] - The dispatch engine and per-session state machine
//! - [`commands`] - The command registry and handlers
//! - [`input`] - The input line buffer and its echo discipline
//! - [`history`] - Bounded command history with recall cursor
//! - [`completion`] - Tab completion over command names
//! - [`events`] - Key events and the byte-stream decoder
//! - [`render`] - The display surface abstraction
//! - [`ansi`] - ANSI style constants and escape stripping
//! - [`config`] - Configuration loading and validation
//! - [`content`] - Portfolio content rendered by the handlers
//! - [`mod@error`] - Error types and Result alias
//!
//! ## Quick Start
//!
//! ```no_run
//! use termfolio::{init, Session};
//! use termfolio::render::AnsiRenderer;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = init()?;
//! let mut session = Session::new(&config);
//! let mut renderer = AnsiRenderer::new(std::io::stdout());
//! session.start(&mut renderer);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The engine is fully synchronous: [`Session::handle_key`] consumes one
//! [`events::KeyEvent`] at a time and returns a [`session::Flow`] telling
//! the host what to do next. Async I/O and the restart delay live in the
//! binary, which keeps the engine deterministic under test with a
//! [`render::RecordingRenderer`].

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod commands;
pub mod completion;
pub mod config;
pub mod content;
pub mod error;
pub mod events;
pub mod history;
pub mod input;
pub mod render;
pub mod session;

// Re-exports for core functionality
pub use config::{Config, ConfigLoader};
pub use error::{Error, Result};
pub use session::{Flow, Session, SessionState, RESTART_DELAY};

// Convenience re-exports for common types
pub use commands::CommandRegistry;
pub use content::Content;
pub use events::{Key, KeyDecoder, KeyEvent};
pub use history::HistoryBuffer;
pub use render::{AnsiRenderer, RecordingRenderer, Renderer};

/// The current version of Termfolio from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize Termfolio with the default configuration search paths
///
/// Loads configuration from the default locations, falling back to the
/// built-in defaults when no file exists or loading fails. A broken
/// config file is logged and never fatal.
///
/// # Errors
///
/// Returns an error only when a loaded configuration fails validation,
/// since silently running with rejected values would be misleading.
pub fn init() -> Result<Config> {
    info!("initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };

    config.validate()?;
    Ok(config)
}

/// Initialize Termfolio from an explicit configuration file
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    if !config_path.exists() {
        return Err(Error::ConfigLoadFailed {
            path: config_path.to_path_buf(),
            reason: "configuration file does not exist".to_string(),
        });
    }

    let config = ConfigLoader::load_from_file(config_path)?;
    Ok(config)
}
