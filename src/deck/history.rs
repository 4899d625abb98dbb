// Visited-identity history with back/forward replay

/// Record of visited slide identities with a movable cursor.
///
/// Mirrors browser history: stepping back keeps the forward entries
/// until a new identity is recorded, which truncates the forward branch.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: Vec<String>,
    // Index of the current entry; meaningful only while entries is non-empty.
    position: usize,
}

impl HistoryStack {
    pub fn new() -> Self {
        HistoryStack::default()
    }

    /// Record a direct navigation. Recording the identity already at the
    /// cursor is a no-op so re-rendering the current slide never grows
    /// the stack.
    pub fn record(&mut self, id: &str) {
        if self.current() == Some(id) {
            return;
        }
        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
        }
        self.entries.push(id.to_string());
        self.position = self.entries.len() - 1;
    }

    /// Step back, returning the identity to replay
    pub fn back(&mut self) -> Option<String> {
        if self.entries.is_empty() || self.position == 0 {
            return None;
        }
        self.position -= 1;
        Some(self.entries[self.position].clone())
    }

    /// Step forward, returning the identity to replay
    pub fn forward(&mut self) -> Option<String> {
        if self.position + 1 >= self.entries.len() {
            return None;
        }
        self.position += 1;
        Some(self.entries[self.position].clone())
    }

    /// Identity at the cursor
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
