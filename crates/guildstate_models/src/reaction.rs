//! Message reactions.

use crate::{Emoji, Snowflake};

/// An emoji reaction and how many users placed it.
///
/// Reactions are counted by emoji alone; which users reacted is not kept.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Reaction {
    count: u32,
    emoji: Emoji,
    message_id: Snowflake,
}

impl Reaction {
    /// Create a reaction on `message_id`.
    pub fn new(count: u32, emoji: Emoji, message_id: Snowflake) -> Self {
        Self {
            count,
            emoji,
            message_id,
        }
    }

    /// Add one to the count.
    pub fn increment(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Take one from the count, stopping at zero.
    pub fn decrement(&mut self) -> u32 {
        self.count = self.count.saturating_sub(1);
        self.count
    }

    /// Overwrite the count from a snapshot.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Mark the reaction as gone so stale handles read zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Whether the reaction was removed from its message.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
