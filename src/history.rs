//! Command history
//!
//! An append-only, order-preserving sequence of committed lines with a
//! recall cursor. Entries are never deduplicated or reordered. The buffer
//! is a bounded ring: when it overflows, the oldest entry is evicted and
//! the cursor clamps so `cursor <= len` always holds. History lives for one
//! session only; there is no persistence.

use std::collections::VecDeque;

/// Default ring capacity
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Outcome of a recall-next step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecallNext {
    /// Moved forward to this entry
    Entry(String),
    /// Walked past the newest entry; the line should be cleared fresh
    Fresh,
    /// Already at the fresh-line sentinel; nothing to do
    Noop,
}

/// Bounded, append-only command history with a recall cursor
///
/// Invariant: `0 <= cursor <= entries.len()`. A cursor equal to `len`
/// means "not recalling, fresh line".
#[derive(Debug)]
pub struct HistoryBuffer {
    entries: VecDeque<String>,
    cursor: usize,
    max_entries: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_ENTRIES)
    }

    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            cursor: 0,
            max_entries: max_entries.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries oldest-first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Append unconditionally and reset the cursor to the fresh-line sentinel
    pub fn record(&mut self, line: String) {
        self.entries.push_back(line);
        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
        self.cursor = self.entries.len();
    }

    /// Step back one entry; idempotent at the oldest entry
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).map(String::as_str)
    }

    /// Step forward one entry, or signal a fresh line past the newest
    pub fn recall_next(&mut self) -> RecallNext {
        if self.entries.is_empty() || self.cursor >= self.entries.len() {
            return RecallNext::Noop;
        }
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
            RecallNext::Entry(self.entries[self.cursor].clone())
        } else {
            self.cursor = self.entries.len();
            RecallNext::Fresh
        }
    }

    /// Move the cursor back to the fresh-line sentinel
    pub fn reset_cursor(&mut self) {
        self.cursor = self.entries.len();
    }

    #[cfg(test)]
    fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}
