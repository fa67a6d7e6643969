//! Messages.

use crate::{Emoji, Handle, MessagePayload, Reaction, Snowflake, User};
use chrono::{DateTime, Utc};

/// A message held by the bounded message cache.
///
/// The message refers to its channel by id only; the channel keeps
/// nothing but a `last_message_id` back-pointer.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct Message {
    id: Snowflake,
    channel_id: Snowflake,
    guild_id: Option<Snowflake>,
    author: Option<Handle<User>>,
    content: String,
    timestamp: Option<DateTime<Utc>>,
    edited_timestamp: Option<DateTime<Utc>>,
    pinned: bool,
    tts: bool,
    mention_everyone: bool,
    reactions: Vec<Handle<Reaction>>,
}

impl Message {
    /// Build a message from its first snapshot. Reactions are attached
    /// separately.
    pub fn new(payload: &MessagePayload, author: Option<Handle<User>>) -> Self {
        let mut message = Self {
            id: *payload.id(),
            channel_id: *payload.channel_id(),
            guild_id: *payload.guild_id(),
            author,
            content: String::new(),
            timestamp: None,
            edited_timestamp: None,
            pinned: false,
            tts: false,
            mention_everyone: false,
            reactions: Vec::new(),
        };
        message.apply(payload);
        message
    }

    /// Fold the fields present in `payload` into this message.
    pub fn apply(&mut self, payload: &MessagePayload) {
        if let Some(content) = payload.content() {
            self.content = content.clone();
        }
        if let Some(timestamp) = payload.timestamp() {
            self.timestamp = Some(*timestamp);
        }
        if let Some(edited) = payload.edited_timestamp() {
            self.edited_timestamp = Some(*edited);
        }
        if let Some(pinned) = payload.pinned() {
            self.pinned = *pinned;
        }
        if let Some(tts) = payload.tts() {
            self.tts = *tts;
        }
        if let Some(mention_everyone) = payload.mention_everyone() {
            self.mention_everyone = *mention_everyone;
        }
    }

    /// Replace the author handle.
    pub fn set_author(&mut self, author: Option<Handle<User>>) {
        self.author = author;
    }

    /// First reaction placed with `emoji`.
    pub fn find_reaction(&self, emoji: &Emoji) -> Option<Handle<Reaction>> {
        let key = emoji.key();
        self.reactions
            .iter()
            .find(|reaction| reaction.read().emoji().key() == key)
            .cloned()
    }

    /// Mutable access to the reaction list.
    pub fn reactions_mut(&mut self) -> &mut Vec<Handle<Reaction>> {
        &mut self.reactions
    }
}
