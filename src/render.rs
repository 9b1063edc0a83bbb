//! Renderer boundary
//!
//! The engine emits an ordered stream of opaque text writes through the
//! [`Renderer`] trait and never touches the display surface itself.
//! [`AnsiRenderer`] adapts any `io::Write` sink (the TTY driver wraps
//! stdout); [`RecordingRenderer`] captures writes for assertions in tests.

use std::io::Write;

use crate::ansi;

/// The display surface the engine writes to
///
/// Text may embed ANSI escape sequences; how they are rendered is the
/// surface's concern. Write failures are the surface's responsibility too:
/// the engine has no recoverable-error path of its own, so the trait is
/// infallible and implementations degrade as they see fit.
pub trait Renderer {
    /// Write text at the cursor, no trailing newline
    fn write(&mut self, text: &str);

    /// Write text followed by a CRLF newline
    fn write_line(&mut self, text: &str);

    /// Clear all visible content and scrollback
    fn clear_all(&mut self);

    /// Erase the current line and return the cursor to column 0
    fn erase_current_line(&mut self);
}

/// Renderer over any byte sink, emitting raw ANSI
pub struct AnsiRenderer<W: Write> {
    sink: W,
}

impl<W: Write> AnsiRenderer<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Consume the renderer and return the underlying sink
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> Renderer for AnsiRenderer<W> {
    fn write(&mut self, text: &str) {
        // A torn write means the surface is gone; session teardown is the
        // host's job, not ours.
        let _ = self.sink.write_all(text.as_bytes());
        let _ = self.sink.flush();
    }

    fn write_line(&mut self, text: &str) {
        let _ = self.sink.write_all(text.as_bytes());
        let _ = self.sink.write_all(b"\r\n");
        let _ = self.sink.flush();
    }

    fn clear_all(&mut self) {
        let _ = self.sink.write_all(ansi::CLEAR_SCREEN.as_bytes());
        let _ = self.sink.flush();
    }

    fn erase_current_line(&mut self) {
        let _ = self.sink.write_all(ansi::CLEAR_LINE.as_bytes());
        let _ = self.sink.flush();
    }
}

/// A single captured write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOp {
    Write(String),
    WriteLine(String),
    ClearAll,
    EraseCurrentLine,
}

/// Test double that records every write in order
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    ops: Vec<WriteOp>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations captured so far, in emission order
    pub fn ops(&self) -> &[WriteOp] {
        &self.ops
    }

    /// Concatenated output with escape sequences stripped
    ///
    /// `write_line` contributes a trailing `\n`; clears contribute nothing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for op in &self.ops {
            match op {
                WriteOp::Write(t) => out.push_str(&ansi::strip(t)),
                WriteOp::WriteLine(t) => {
                    out.push_str(&ansi::strip(t));
                    out.push('\n');
                }
                WriteOp::ClearAll | WriteOp::EraseCurrentLine => {}
            }
        }
        out
    }

    /// Plain-text lines emitted via `write_line`
    pub fn lines(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                WriteOp::WriteLine(t) => Some(ansi::strip(t)),
                _ => None,
            })
            .collect()
    }

    /// Number of `clear_all` calls seen
    pub fn clear_count(&self) -> usize {
        self.ops.iter().filter(|op| **op == WriteOp::ClearAll).count()
    }

    /// Drop everything recorded so far
    pub fn reset(&mut self) {
        self.ops.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn write(&mut self, text: &str) {
        self.ops.push(WriteOp::Write(text.to_string()));
    }

    fn write_line(&mut self, text: &str) {
        self.ops.push(WriteOp::WriteLine(text.to_string()));
    }

    fn clear_all(&mut self) {
        self.ops.push(WriteOp::ClearAll);
    }

    fn erase_current_line(&mut self) {
        self.ops.push(WriteOp::EraseCurrentLine);
    }
}
