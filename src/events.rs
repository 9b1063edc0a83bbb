//! Key events and raw-byte decoding
//!
//! The engine consumes discrete [`KeyEvent`]s from a key source; it never
//! sees raw terminal bytes. [`KeyDecoder`] is one producer of those events:
//! a byte-at-a-time state machine used by the TTY driver that folds escape
//! sequences (arrow keys) and multi-byte UTF-8 input into logical keys.
//! Tests and other front ends synthesize [`KeyEvent`]s directly.

/// A logical key delivered to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Commit the current line (Enter / Return)
    Enter,
    /// Erase one character at the tail (Backspace / DEL)
    Backspace,
    /// Recall the previous history entry (Up arrow)
    Up,
    /// Recall the next history entry (Down arrow)
    Down,
    /// Request completion (Tab)
    Tab,
    /// A printable character
    Char(char),
    /// Any other non-printable key; routed nowhere and silently ignored
    Unknown,
}

/// Modifier flags accompanying a key event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// True when no modifier is held
    pub fn none(&self) -> bool {
        !self.ctrl && !self.alt && !self.meta
    }
}

/// A discrete key event as delivered by the key source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// An unmodified key
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// An unmodified printable character
    pub fn ch(c: char) -> Self {
        Self::plain(Key::Char(c))
    }

    /// A Ctrl-modified character (e.g. Ctrl-C, Ctrl-L)
    pub fn ctrl(c: char) -> Self {
        Self {
            key: Key::Char(c),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        }
    }
}

/// Decoder state while assembling a multi-byte input
#[derive(Debug, Clone, PartialEq, Eq)]
enum DecodeState {
    /// Expecting a fresh byte
    Ground,
    /// Saw ESC, waiting for `[`
    Escape,
    /// Saw ESC `[`, waiting for the final byte of a CSI sequence
    Csi,
    /// Assembling a UTF-8 scalar; holds collected bytes and the total length
    Utf8 { buf: Vec<u8>, len: usize },
}

/// Byte-at-a-time decoder from raw terminal input to [`KeyEvent`]s
///
/// Handles the control bytes a raw-mode TTY produces: CR/LF for Enter,
/// DEL/BS for Backspace, Tab, Ctrl-C (0x03), Ctrl-L (0x0c), and the
/// `ESC [ A` / `ESC [ B` arrow sequences. Anything else non-printable
/// decodes to [`Key::Unknown`].
#[derive(Debug)]
pub struct KeyDecoder {
    state: DecodeState,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self {
            state: DecodeState::Ground,
        }
    }

    /// Feed one byte; returns a complete event once one is assembled
    pub fn feed(&mut self, byte: u8) -> Option<KeyEvent> {
        match std::mem::replace(&mut self.state, DecodeState::Ground) {
            DecodeState::Ground => self.feed_ground(byte),
            DecodeState::Escape => {
                if byte == b'[' {
                    self.state = DecodeState::Csi;
                    None
                } else {
                    // Bare ESC followed by something else; swallow both.
                    Some(KeyEvent::plain(Key::Unknown))
                }
            }
            DecodeState::Csi => Some(KeyEvent::plain(match byte {
                b'A' => Key::Up,
                b'B' => Key::Down,
                _ => Key::Unknown,
            })),
            DecodeState::Utf8 { mut buf, len } => {
                buf.push(byte);
                if buf.len() == len {
                    match std::str::from_utf8(&buf) {
                        Ok(s) => s.chars().next().map(KeyEvent::ch),
                        Err(_) => Some(KeyEvent::plain(Key::Unknown)),
                    }
                } else {
                    self.state = DecodeState::Utf8 { buf, len };
                    None
                }
            }
        }
    }

    fn feed_ground(&mut self, byte: u8) -> Option<KeyEvent> {
        match byte {
            b'\r' | b'\n' => Some(KeyEvent::plain(Key::Enter)),
            0x7f | 0x08 => Some(KeyEvent::plain(Key::Backspace)),
            b'\t' => Some(KeyEvent::plain(Key::Tab)),
            0x03 => Some(KeyEvent::ctrl('c')),
            0x0c => Some(KeyEvent::ctrl('l')),
            0x1b => {
                self.state = DecodeState::Escape;
                None
            }
            b if b < 0x20 => Some(KeyEvent::plain(Key::Unknown)),
            b if b < 0x80 => Some(KeyEvent::ch(b as char)),
            b => {
                let len = utf8_len(b);
                if len == 0 {
                    // Stray continuation byte
                    Some(KeyEvent::plain(Key::Unknown))
                } else {
                    self.state = DecodeState::Utf8 {
                        buf: vec![b],
                        len,
                    };
                    None
                }
            }
        }
    }
}

impl Default for KeyDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Expected total byte length of a UTF-8 scalar from its leading byte
fn utf8_len(lead: u8) -> usize {
    match lead {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 0,
    }
}
