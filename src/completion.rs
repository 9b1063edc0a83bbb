//! Prefix completion
//!
//! Resolves a partial command name to a full one by matching against the
//! registry. Only the first whitespace-delimited token is eligible: once
//! the input contains a space the user is typing arguments and completion
//! is a no-op. Matching is a case-sensitive prefix test, and ambiguous
//! candidates come back in the registry's stable enumeration order.

use crate::commands::CommandRegistry;

/// Result of resolving a partial input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// No candidates; the buffer stays as it is
    None,
    /// Exactly one command matches; the buffer is replaced wholesale
    Unique(&'static str),
    /// Several commands match; listed, then the original input is redrawn
    Ambiguous(Vec<&'static str>),
}

/// Resolve `partial` against the registry
pub fn complete(partial: &str, registry: &CommandRegistry) -> Completion {
    let input = partial.trim();
    if input.is_empty() || input.contains(char::is_whitespace) {
        return Completion::None;
    }

    let candidates: Vec<&'static str> = registry
        .names()
        .filter(|name| name.starts_with(input))
        .collect();

    match candidates.len() {
        0 => Completion::None,
        1 => Completion::Unique(candidates[0]),
        _ => Completion::Ambiguous(candidates),
    }
}
