//! ANSI escape sequence utilities
//!
//! Write-side helpers for the escape sequences the engine embeds in its
//! output: prompt colors, line clearing, and the erase-one-column sequence
//! used by backspace. The engine is agnostic to how a renderer interprets
//! these; they are preserved verbatim for visual fidelity.

use once_cell::sync::Lazy;
use regex::Regex;

/// Reset all colors and attributes
pub const RESET: &str = "\x1b[0m";

/// Bold text
pub const BOLD: &str = "\x1b[1m";

/// Underlined text
pub const UNDERLINE: &str = "\x1b[4m";

/// Cyan foreground
pub const CYAN: &str = "\x1b[36m";

/// Bold green foreground (prompt user@host segment)
pub const BOLD_GREEN: &str = "\x1b[1;32m";

/// Bold blue foreground (prompt working-directory segment)
pub const BOLD_BLUE: &str = "\x1b[1;34m";

/// Bold red foreground
pub const BOLD_RED: &str = "\x1b[1;31m";

/// Bold yellow foreground
pub const BOLD_YELLOW: &str = "\x1b[1;33m";

/// Bold cyan foreground
pub const BOLD_CYAN: &str = "\x1b[1;36m";

/// Carriage return plus erase-to-end-of-line
pub const CLEAR_LINE: &str = "\r\x1b[K";

/// Erase one column: move left, overwrite with a space, move left again
pub const ERASE_COLUMN: &str = "\x08 \x08";

/// Clear the whole screen and home the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Matches the escape sequences this crate emits (colors, clears, moves)
static ESCAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").expect("valid escape regex"));

/// Wrap `text` in a style escape followed by a reset
pub fn styled(style: &str, text: &str) -> String {
    format!("{}{}{}", style, text, RESET)
}

/// Strip all escape sequences, leaving plain text
///
/// Used by tests to assert on visible output without caring about styling.
pub fn strip(text: &str) -> String {
    ESCAPE_RE.replace_all(text, "").into_owned()
}
