//! Reaction counting on cached messages.
//!
//! Reactions are matched by emoji identity alone: unicode emoji by name,
//! custom emoji by id. Which users reacted is not tracked, so removing one
//! user's reaction only lowers the shared count.

use crate::StateRegistry;
use guildstate_models::{Emoji, EmojiPayload, Handle, Message, Reaction, ReactionPayload, handle};
use std::sync::Arc;
use tracing::{debug, instrument};

impl StateRegistry {
    /// Count one more use of `emoji` on `message`, creating the reaction at
    /// 1 if the message has none for it yet.
    #[instrument(skip_all, fields(emoji = %emoji.key()))]
    pub fn increment_reaction_count(
        &mut self,
        message: &Handle<Message>,
        emoji: &Emoji,
    ) -> Handle<Reaction> {
        let existing = message.read().find_reaction(emoji);
        if let Some(reaction) = existing {
            reaction.write().increment();
            return reaction;
        }
        let message_id = *message.read().id();
        let reaction = handle(Reaction::new(1, emoji.clone(), message_id));
        message.write().reactions_mut().push(reaction.clone());
        reaction
    }

    /// Count one less use of `emoji` on `message`.
    ///
    /// A reaction that drops to zero is detached from the message. Returns
    /// `None` when the message has no reaction for `emoji`.
    #[instrument(skip_all, fields(emoji = %emoji.key()))]
    pub fn decrement_reaction_count(
        &mut self,
        message: &Handle<Message>,
        emoji: &Emoji,
    ) -> Option<Handle<Reaction>> {
        let reaction = message.read().find_reaction(emoji)?;
        let remaining = reaction.write().decrement();
        if remaining == 0 {
            detach(message, &reaction);
            debug!("Reaction count reached zero");
        }
        Some(reaction)
    }

    /// Remove the reaction for `emoji` from `message`, zeroing its count so
    /// outside holders see it is gone.
    #[instrument(skip_all, fields(emoji = %emoji.key()))]
    pub fn delete_reaction(
        &mut self,
        message: &Handle<Message>,
        emoji: &Emoji,
    ) -> Option<Handle<Reaction>> {
        let reaction = message.read().find_reaction(emoji)?;
        detach(message, &reaction);
        reaction.write().reset();
        Some(reaction)
    }

    /// Remove every reaction from `message`, zeroing each count.
    #[instrument(skip_all)]
    pub fn delete_all_reactions(&mut self, message: &Handle<Message>) -> Vec<Handle<Reaction>> {
        let removed = std::mem::take(message.write().reactions_mut());
        for reaction in &removed {
            reaction.write().reset();
        }
        debug!(count = removed.len(), "Cleared reactions");
        removed
    }

    /// Set a reaction's count from a snapshot.
    ///
    /// Returns `None` when the snapshot names no message, the message is not
    /// cached, or the snapshot count is zero.
    #[instrument(skip_all, fields(message_id = ?payload.message_id()))]
    pub fn parse_reaction(&mut self, payload: &ReactionPayload) -> Option<Handle<Reaction>> {
        let message_id = (*payload.message_id())?;
        let message = self.get_message_by_id(message_id)?;
        let emoji = self.reaction_emoji(payload.emoji());
        apply_count(&message, emoji, *payload.count())
    }

    /// Emoji for a reaction: the indexed guild emoji when known, otherwise
    /// transient. Reaction snapshots carry partial emoji, so nothing is
    /// updated.
    pub(crate) fn reaction_emoji(&self, payload: &EmojiPayload) -> Emoji {
        match (*payload.id()).and_then(|id| self.emojis.get(&id)) {
            Some(emoji) => Emoji::Guild(emoji),
            None => Emoji::from_payload(payload),
        }
    }
}

/// Set the absolute count for `emoji` on `message`. A zero count removes
/// the reaction.
pub(crate) fn apply_count(
    message: &Handle<Message>,
    emoji: Emoji,
    count: u32,
) -> Option<Handle<Reaction>> {
    let existing = message.read().find_reaction(&emoji);
    match existing {
        Some(reaction) if count == 0 => {
            detach(message, &reaction);
            reaction.write().reset();
            None
        }
        Some(reaction) => {
            reaction.write().set_count(count);
            Some(reaction)
        }
        None if count == 0 => None,
        None => {
            let message_id = *message.read().id();
            let reaction = handle(Reaction::new(count, emoji, message_id));
            message.write().reactions_mut().push(reaction.clone());
            Some(reaction)
        }
    }
}

fn detach(message: &Handle<Message>, reaction: &Handle<Reaction>) {
    message
        .write()
        .reactions_mut()
        .retain(|held| !Arc::ptr_eq(held, reaction));
}
