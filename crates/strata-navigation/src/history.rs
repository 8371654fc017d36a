//! Per-tab session history
//!
//! A linear back/forward stack. `current_index` always addresses a valid
//! entry and the stack is never empty.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHistory {
    entries: Vec<String>,
    current_index: usize,
}

impl SessionHistory {
    /// Seed a history with the tab's first address.
    pub fn new(initial: String) -> Self {
        Self {
            entries: vec![initial],
            current_index: 0,
        }
    }

    /// Record a new navigation. Forward entries past the current one are
    /// discarded before the new entry is appended.
    pub fn push(&mut self, url: String) {
        if self.can_go_forward() {
            let dropped = self.entries.len() - self.current_index - 1;
            self.entries.truncate(self.current_index + 1);
            tracing::debug!(dropped, "Discarded forward history");
        }

        self.entries.push(url);
        self.current_index = self.entries.len() - 1;
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index < self.entries.len() - 1
    }

    /// Step one entry back, returning the entry now current.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.current_index -= 1;
        Some(self.current())
    }

    /// Step one entry forward, returning the entry now current.
    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.current_index += 1;
        Some(self.current())
    }

    pub fn current(&self) -> &str {
        &self.entries[self.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
