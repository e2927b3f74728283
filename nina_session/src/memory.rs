//! Bounded conversation memory.

use std::collections::VecDeque;

use nina_core::{ChatMessage, Role};

/// Number of entries kept per chat unless configured otherwise.
pub const DEFAULT_MEMORY_LIMIT: usize = 10;

/// FIFO window over the most recent messages of a chat.
///
/// Pushing past the limit evicts the oldest entry, so the window never holds
/// more than `limit` messages.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    limit: usize,
    messages: VecDeque<ChatMessage>,
}

impl MemoryWindow {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            limit,
            messages: VecDeque::with_capacity(limit + 1),
        }
    }

    /// Append a message, evicting the oldest one when over the limit.
    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push_back(ChatMessage::new(role, content));
        if self.messages.len() > self.limit {
            self.messages.pop_front();
        }
    }

    /// Messages in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MEMORY_LIMIT)
    }
}
