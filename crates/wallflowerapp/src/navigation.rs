//! # Navigation
//!
//! The session needs two things from whatever hosts it: the current location,
//! and a way to replace that location without adding a history entry. External
//! navigation (`push`, `back`, `forward`) belongs to the host; the session only
//! observes its result.
//!
//! [`MemoryHistory`] is a browser-style history stack kept in memory. The CLI
//! uses it for the single page visit of one invocation; tests use it to check
//! that filter edits never grow the history.

use crate::codec::query::SEARCH_PATH;

pub trait Navigator {
    /// Current location, path plus optional query (`/search?starMin=5`).
    fn location(&self) -> &str;

    /// New history entry; discards anything ahead of the cursor.
    fn push(&mut self, location: &str);

    /// Overwrites the current entry in place.
    fn replace(&mut self, location: &str);

    /// Returns false when already at the oldest entry.
    fn back(&mut self) -> bool;

    /// Returns false when already at the newest entry.
    fn forward(&mut self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![initial.into()],
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(SEARCH_PATH)
    }
}

impl Navigator for MemoryHistory {
    fn location(&self) -> &str {
        &self.entries[self.cursor]
    }

    fn push(&mut self, location: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location.to_string());
        self.cursor = self.entries.len() - 1;
    }

    fn replace(&mut self, location: &str) {
        self.entries[self.cursor] = location.to_string();
    }

    fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }
}
