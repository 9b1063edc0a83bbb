//! Termfolio - a simulated interactive shell for a terminal portfolio
//!
//! This binary drives the engine over a real TTY: it puts stdin into raw
//! mode, decodes the incoming byte stream into key events, and feeds them
//! to a [`Session`] writing to stdout. The engine itself is synchronous;
//! only stdin reads and the restart delay are async here.

use std::env;
use std::path::PathBuf;
use std::pin::Pin;
use std::process;

use anyhow::Context;
use tokio::io::AsyncReadExt;
use tokio::time::{sleep, Sleep};
use tracing::{debug, info};

use termfolio::render::AnsiRenderer;
use termfolio::session::{Flow, Session, RESTART_DELAY};
use termfolio::{Config, KeyDecoder};

/// Application configuration
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        anyhow::bail!("missing config file path");
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-h" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("termfolio v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg => {
                    anyhow::bail!("unknown option: {}", arg);
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("Termfolio - a simulated interactive shell for a terminal portfolio");
    println!();
    println!("USAGE:");
    println!("    termfolio [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Path to configuration file");
    println!("    -d, --debug            Enable debug logging");
    println!("    -h, --help             Print this help message");
    println!("    -v, --version          Print version information");
    println!();
    println!("CONFIGURATION:");
    println!("    Termfolio looks for configuration files in the following order:");
    println!("    1. Path specified with --config");
    println!("    2. $XDG_CONFIG_HOME/termfolio/config.toml (or config.json)");
    println!("    3. ~/.termfolio/config.toml");
    println!("    4. ./termfolio.toml");
    println!("    5. Built-in defaults");
    println!();
    println!("ENVIRONMENT:");
    println!("    RUST_LOG    Set logging level (error, warn, info, debug, trace)");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        print_help();
        process::exit(1);
    });

    // Logs go to stderr; stdout is the display surface.
    let log_level = if args.debug { "debug" } else { "info" };
    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    info!("starting termfolio v{}", env!("CARGO_PKG_VERSION"));

    let config = match &args.config_path {
        Some(path) => termfolio::init_with_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => termfolio::init().context("initializing")?,
    };

    // The guard restores the original termios on every exit path.
    let _raw_guard = raw_mode::enable().context("entering raw terminal mode")?;
    run(&config).await
}

/// Resolves when the pending restart timer fires; parks forever when none
/// is scheduled so the select loop is driven by stdin alone
async fn timer_fired(timer: &mut Option<Pin<Box<Sleep>>>) {
    match timer.as_mut() {
        Some(t) => t.as_mut().await,
        None => std::future::pending().await,
    }
}

/// Session loop: each pass is one full session, from banner to restart
async fn run(config: &Config) -> anyhow::Result<()> {
    let mut stdin = tokio::io::stdin();
    let mut renderer = AnsiRenderer::new(std::io::stdout());
    let mut buf = [0u8; 1024];

    loop {
        let mut session = Session::new(config);
        let mut decoder = KeyDecoder::new();
        session.start(&mut renderer);

        // Armed when a handler scheduled a deferred restart; dropping it
        // (session teardown) cancels the pending action.
        let mut restart_timer: Option<Pin<Box<Sleep>>> = None;

        'session: loop {
            tokio::select! {
                _ = timer_fired(&mut restart_timer) => {
                    restart_timer = None;
                    if session.fire_restart_timer(&mut renderer) == Flow::Restart {
                        break 'session;
                    }
                }
                read = stdin.read(&mut buf) => {
                    let n = read.context("reading stdin")?;
                    if n == 0 {
                        info!("stdin closed, shutting down");
                        return Ok(());
                    }
                    for &byte in &buf[..n] {
                        let Some(event) = decoder.feed(byte) else {
                            continue;
                        };
                        match session.handle_key(event, &mut renderer) {
                            Flow::Continue => {}
                            Flow::TimerScheduled => {
                                restart_timer = Some(Box::pin(sleep(RESTART_DELAY)));
                            }
                            Flow::Restart => break 'session,
                        }
                    }
                }
            }
        }

        debug!("restarting session");
    }
}

#[cfg(unix)]
mod raw_mode {
    //! Raw-mode guard for the controlling terminal

    use std::io::IsTerminal;

    use nix::sys::termios::{self, SetArg, Termios};

    /// Restores the original terminal attributes on drop
    pub struct RawModeGuard {
        original: Option<Termios>,
    }

    pub fn enable() -> anyhow::Result<RawModeGuard> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            // Piped input (tests, scripts) needs no termios fiddling.
            return Ok(RawModeGuard { original: None });
        }

        let original = termios::tcgetattr(&stdin)?;
        let mut raw = original.clone();
        termios::cfmakeraw(&mut raw);
        termios::tcsetattr(&stdin, SetArg::TCSANOW, &raw)?;
        Ok(RawModeGuard {
            original: Some(original),
        })
    }

    impl Drop for RawModeGuard {
        fn drop(&mut self) {
            if let Some(original) = &self.original {
                let _ = termios::tcsetattr(&std::io::stdin(), SetArg::TCSANOW, original);
            }
        }
    }
}

#[cfg(not(unix))]
mod raw_mode {
    //! No raw mode off Unix; line-buffered input still mostly works

    pub struct RawModeGuard;

    pub fn enable() -> anyhow::Result<RawModeGuard> {
        Ok(RawModeGuard)
    }
}
