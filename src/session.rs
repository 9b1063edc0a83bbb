//! Session and dispatch engine
//!
//! One [`Session`] per connected display surface. It owns the input line,
//! the history buffer and the command registry, and routes every key event
//! strictly in arrival order; a key is fully processed, including any
//! synchronous handler it triggers, before the next is accepted.
//!
//! The session is a two-state machine. In `Active` it edits and dispatches.
//! `exit` and `reboot` move it to `AwaitingRestart` with a one-shot
//! deferred action: the host drives the timer (the TTY driver sleeps, tests
//! call [`Session::fire_restart_timer`] directly), so tearing the session
//! down before the deadline simply abandons the pending restart.

use std::time::Duration;

use tracing::{debug, info};

use crate::ansi;
use crate::commands::{self, CommandRegistry, HandlerContext, HandlerOutcome, RestartKind};
use crate::completion::{complete, Completion};
use crate::config::Config;
use crate::content::Content;
use crate::events::{Key, KeyEvent};
use crate::history::{HistoryBuffer, RecallNext};
use crate::input::InputLine;
use crate::render::Renderer;

/// Fixed delay before a scheduled restart action fires
pub const RESTART_DELAY: Duration = Duration::from_secs(1);

/// What the host should do after the engine processed an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep delivering key events
    Continue,
    /// A restart was scheduled; call `fire_restart_timer` after
    /// [`RESTART_DELAY`] (or drop the session to cancel)
    TimerScheduled,
    /// Tear this session down and start a fresh one
    Restart,
}

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Editing and dispatching normally
    Active,
    /// A restart is pending; all normal key routing is suspended.
    /// `armed` is set once the exit timer has fired and the single-shot
    /// any-key listener is live.
    AwaitingRestart { kind: RestartKind, armed: bool },
}

/// A simulated shell session bound to one display surface
pub struct Session {
    user: String,
    host: String,
    registry: CommandRegistry,
    content: Content,
    input: InputLine,
    history: HistoryBuffer,
    state: SessionState,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            user: config.session.user.clone(),
            host: config.session.host.clone(),
            registry: CommandRegistry::new(),
            content: config.content.clone(),
            input: InputLine::new(),
            history: HistoryBuffer::with_capacity(config.history.max_entries),
            state: SessionState::Active,
        }
    }

    /// Emit the welcome banner and the first prompt
    pub fn start(&mut self, renderer: &mut dyn Renderer) {
        info!(user = %self.user, host = %self.host, "session started");
        commands::write_banner(&self.content, renderer);
        self.emit_prompt(renderer);
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Text currently in the input buffer
    pub fn input_buffer(&self) -> &str {
        self.input.as_str()
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Styled prompt text, without a leading newline
    pub fn prompt_text(&self) -> String {
        format!(
            "{}{}@{}{}:{}~{}$ ",
            ansi::BOLD_GREEN,
            self.user,
            self.host,
            ansi::RESET,
            ansi::BOLD_BLUE,
            ansi::RESET,
        )
    }

    /// Route one key event; returns what the host should do next
    pub fn handle_key(&mut self, event: KeyEvent, renderer: &mut dyn Renderer) -> Flow {
        if let SessionState::AwaitingRestart { armed, .. } = self.state {
            // Routing is suspended; only the armed any-key listener reacts.
            return if armed { Flow::Restart } else { Flow::Continue };
        }

        match event.key {
            Key::Enter => self.commit(renderer),
            Key::Backspace => {
                self.input.backspace(renderer);
                Flow::Continue
            }
            Key::Up => {
                if let Some(line) = self.history.recall_previous().map(str::to_string) {
                    self.redraw_with(&line, renderer);
                }
                Flow::Continue
            }
            Key::Down => {
                match self.history.recall_next() {
                    RecallNext::Entry(line) => self.redraw_with(&line, renderer),
                    RecallNext::Fresh => {
                        let prompt = self.prompt_text();
                        self.input.clear(&prompt, renderer);
                    }
                    RecallNext::Noop => {}
                }
                Flow::Continue
            }
            Key::Tab => self.complete_input(renderer),
            Key::Char(ch) if event.modifiers.ctrl => {
                match ch {
                    'c' => self.interrupt(renderer),
                    'l' => self.clear_screen(renderer),
                    _ => {}
                }
                Flow::Continue
            }
            Key::Char(ch) if event.modifiers.none() => {
                self.input.append(ch, renderer);
                Flow::Continue
            }
            // Modifier-only combinations and unrecognized keys
            _ => Flow::Continue,
        }
    }

    /// Drive the pending restart action; the host calls this once,
    /// [`RESTART_DELAY`] after `handle_key` returned `TimerScheduled`
    pub fn fire_restart_timer(&mut self, renderer: &mut dyn Renderer) -> Flow {
        match self.state {
            SessionState::AwaitingRestart {
                kind: RestartKind::Exit,
                armed: false,
            } => {
                renderer.write("\r\nPress any key to restart...");
                self.state = SessionState::AwaitingRestart {
                    kind: RestartKind::Exit,
                    armed: true,
                };
                Flow::Continue
            }
            SessionState::AwaitingRestart {
                kind: RestartKind::Reboot,
                ..
            } => Flow::Restart,
            _ => Flow::Continue,
        }
    }

    /// Redraw the prompt line with `text` recalled into the buffer
    fn redraw_with(&mut self, text: &str, renderer: &mut dyn Renderer) {
        let prompt = self.prompt_text();
        self.input.clear(&prompt, renderer);
        self.input.replace(text, renderer);
    }

    /// Emit a fresh prompt on its own line
    fn emit_prompt(&self, renderer: &mut dyn Renderer) {
        renderer.write("\r\n");
        renderer.write(&self.prompt_text());
    }

    /// Commit the current line: record, parse, dispatch
    fn commit(&mut self, renderer: &mut dyn Renderer) -> Flow {
        renderer.write_line("");
        let line = self.input.commit();

        if line.is_empty() {
            self.emit_prompt(renderer);
            return Flow::Continue;
        }

        // The raw trimmed input is what history keeps, not the lowercased
        // command token.
        self.history.record(line.clone());

        let mut tokens = line.split_whitespace();
        let command_name = tokens.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = tokens.collect();
        debug!(command = %command_name, argc = args.len(), "dispatch");

        match self.registry.lookup(&command_name) {
            Some(cmd) => {
                let prompt = self.prompt_text();
                let mut ctx = HandlerContext {
                    user: &self.user,
                    host: &self.host,
                    prompt: &prompt,
                    content: &self.content,
                    history: &self.history,
                    renderer,
                };
                match cmd.execute(&args, &mut ctx) {
                    HandlerOutcome::Done => Flow::Continue,
                    HandlerOutcome::ScheduleRestart(kind) => {
                        debug!(?kind, "restart scheduled");
                        self.state = SessionState::AwaitingRestart { kind, armed: false };
                        Flow::TimerScheduled
                    }
                }
            }
            None => {
                renderer.write_line(&format!("bash: {}: command not found", command_name));
                self.emit_prompt(renderer);
                Flow::Continue
            }
        }
    }

    /// Resolve Tab against the registry
    fn complete_input(&mut self, renderer: &mut dyn Renderer) -> Flow {
        let partial = self.input.as_str().trim().to_string();
        match complete(&partial, &self.registry) {
            Completion::None => {}
            Completion::Unique(name) => {
                let prompt = self.prompt_text();
                self.input.clear(&prompt, renderer);
                self.input.replace(name, renderer);
            }
            Completion::Ambiguous(names) => {
                // List candidates, then restore the line; the buffer is
                // untouched so editing picks up where it left off.
                renderer.write_line("");
                renderer.write_line(&names.join("  "));
                self.emit_prompt(renderer);
                renderer.write(self.input.as_str());
            }
        }
        Flow::Continue
    }

    /// Ctrl-C: echo `^C`, drop the line, re-prompt; never recorded
    fn interrupt(&mut self, renderer: &mut dyn Renderer) {
        renderer.write_line("^C");
        self.input.discard();
        self.emit_prompt(renderer);
    }

    /// Ctrl-L: wipe the surface and re-prompt on a fresh line
    fn clear_screen(&mut self, renderer: &mut dyn Renderer) {
        renderer.clear_all();
        self.input.discard();
        self.emit_prompt(renderer);
    }
}
