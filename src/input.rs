//! Input line state
//!
//! The mutable buffer holding the line currently being composed. Editing is
//! tail-only: append and backspace, no in-line cursor. Every mutation pairs
//! with exactly one renderer write so the displayed line and the buffer
//! never diverge.

use crate::ansi;
use crate::render::Renderer;

/// The line currently being composed
#[derive(Debug, Default)]
pub struct InputLine {
    buffer: String,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer contents
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Append a printable character and echo it
    ///
    /// Control characters are not storable here; special keys are routed
    /// before this point, so a stray control char is a silent no-op.
    pub fn append(&mut self, ch: char, renderer: &mut dyn Renderer) {
        if ch.is_control() {
            return;
        }
        self.buffer.push(ch);
        renderer.write(&ch.to_string());
    }

    /// Remove the last character and erase its column; no-op when empty
    pub fn backspace(&mut self, renderer: &mut dyn Renderer) {
        if self.buffer.pop().is_some() {
            renderer.write(ansi::ERASE_COLUMN);
        }
    }

    /// Reset the buffer and redraw the prompt line in place
    ///
    /// Used for explicit clearing and for history-recall redraws: carriage
    /// return, clear-line, then the prompt text without a leading newline.
    pub fn clear(&mut self, prompt: &str, renderer: &mut dyn Renderer) {
        self.buffer.clear();
        renderer.write(ansi::CLEAR_LINE);
        renderer.write(prompt);
    }

    /// Replace the whole buffer with recalled or completed text and echo it
    pub fn replace(&mut self, text: &str, renderer: &mut dyn Renderer) {
        self.buffer = text.to_string();
        renderer.write(text);
    }

    /// Discard the buffer without any renderer write
    ///
    /// The interrupt path emits its own `^C` echo; pairing happens there.
    pub fn discard(&mut self) {
        self.buffer.clear();
    }

    /// Take the trimmed contents and reset the buffer
    pub fn commit(&mut self) -> String {
        let committed = self.buffer.trim().to_string();
        self.buffer.clear();
        committed
    }
}
