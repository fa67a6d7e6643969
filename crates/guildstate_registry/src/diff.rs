//! Before/after pairs returned by update operations.

use derive_getters::Getters;
use guildstate_models::{GuildEmoji, Handle, Member, Presence};

/// Snapshot taken before an in-place update, plus the updated live entity.
///
/// `old` is a detached copy; `new` is the same handle every other holder
/// sees. Collections inside `old` still point at live children.
#[derive(Debug, Clone, Getters)]
pub struct Diff<T> {
    old: T,
    new: Handle<T>,
}

impl<T> Diff<T> {
    /// Pair a prior snapshot with the live entity.
    pub fn pair(old: T, new: Handle<T>) -> Self {
        Self { old, new }
    }

    /// Split into `(old, new)`.
    pub fn into_parts(self) -> (T, Handle<T>) {
        (self.old, self.new)
    }
}

/// Result of replacing a member's presence.
#[derive(Debug, Clone, Getters)]
pub struct PresenceDiff {
    member: Handle<Member>,
    old: Option<Presence>,
    new: Presence,
}

impl PresenceDiff {
    pub(crate) fn from_parts(
        member: Handle<Member>,
        old: Option<Presence>,
        new: Presence,
    ) -> Self {
        Self { member, old, new }
    }
}

/// Result of replacing a guild's whole emoji set.
#[derive(Debug, Clone, Getters)]
pub struct EmojiSetDiff {
    old: Vec<GuildEmoji>,
    new: Vec<Handle<GuildEmoji>>,
}

impl EmojiSetDiff {
    pub(crate) fn pair(old: Vec<GuildEmoji>, new: Vec<Handle<GuildEmoji>>) -> Self {
        Self { old, new }
    }

    /// Ids present before but not after.
    pub fn removed_ids(&self) -> Vec<u64> {
        let kept: Vec<u64> = self.new.iter().map(|emoji| *emoji.read().id()).collect();
        self.old
            .iter()
            .map(|emoji| *emoji.id())
            .filter(|id| !kept.contains(id))
            .collect()
    }
}
