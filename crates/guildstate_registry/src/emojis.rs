//! Emoji upsert and the guild emoji set.

use crate::ownership::{EmojiHome, emoji_home};
use crate::{EmojiSetDiff, StateRegistry};
use guildstate_error::GuildStateResult;
use guildstate_models::{Emoji, EmojiPayload, GuildEmoji, Handle, Snowflake, handle};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

impl StateRegistry {
    /// Resolve an emoji snapshot.
    ///
    /// A custom emoji that is already indexed is updated in place and
    /// returned as [`Emoji::Guild`], whatever `guild_id` says. Otherwise a
    /// custom emoji parsed for a guild becomes owned by that guild, and
    /// anything else is built transiently and owned by the caller.
    ///
    /// # Errors
    ///
    /// Fails when `guild_id` names an uncached guild.
    #[instrument(skip(self, payload), fields(emoji_id = ?payload.id()))]
    pub fn parse_emoji(
        &mut self,
        payload: &EmojiPayload,
        guild_id: Option<Snowflake>,
    ) -> GuildStateResult<Emoji> {
        if let Some(existing) = (*payload.id()).and_then(|id| self.emojis.get(&id)) {
            existing.write().apply(payload);
            return Ok(Emoji::Guild(existing));
        }
        match emoji_home(*payload.id(), guild_id) {
            EmojiHome::Transient => Ok(Emoji::from_payload(payload)),
            EmojiHome::Guild { emoji_id, guild_id } => {
                let guild = self.require_guild("emoji", emoji_id, guild_id)?;
                let emoji = handle(GuildEmoji::from_payload(payload, emoji_id, guild_id));
                guild.write().emojis_mut().insert(emoji_id, emoji.clone());
                self.emojis.put(emoji_id, &emoji);
                debug!(guild_id, "Registered guild emoji");
                Ok(Emoji::Guild(emoji))
            }
        }
    }

    /// Replace the whole emoji set of a guild.
    ///
    /// Emoji missing from `payloads` are removed from the guild and the
    /// emoji index. Returns `Ok(None)` when the guild is not cached.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`StateRegistry::parse_emoji`].
    #[instrument(skip(self, payloads), fields(count = payloads.len()))]
    pub fn update_guild_emojis(
        &mut self,
        guild_id: Snowflake,
        payloads: &[EmojiPayload],
    ) -> GuildStateResult<Option<EmojiSetDiff>> {
        let Some(guild) = self.guilds.get(&guild_id).cloned() else {
            return Ok(None);
        };
        let old: Vec<GuildEmoji> = guild
            .read()
            .emojis()
            .values()
            .map(|emoji| emoji.read().clone())
            .collect();

        let mut new = Vec::with_capacity(payloads.len());
        for payload in payloads {
            match self.parse_emoji(payload, Some(guild_id))? {
                Emoji::Guild(emoji) => new.push(emoji),
                _ => warn!("Guild emoji without an id ignored"),
            }
        }

        let kept: HashSet<Snowflake> = new.iter().map(|emoji| *emoji.read().id()).collect();
        let stale: Vec<Snowflake> = old
            .iter()
            .map(|emoji| *emoji.id())
            .filter(|id| !kept.contains(id))
            .collect();
        for emoji_id in &stale {
            guild.write().emojis_mut().remove(emoji_id);
            self.emojis.remove(emoji_id);
        }
        debug!(removed = stale.len(), "Replaced guild emoji set");
        Ok(Some(EmojiSetDiff::pair(old, new)))
    }

    /// Remove a custom emoji from its guild and the emoji index.
    ///
    /// Deleting an unknown emoji is a no-op.
    #[instrument(skip(self))]
    pub fn delete_emoji(&mut self, emoji_id: Snowflake) -> Option<Handle<GuildEmoji>> {
        let emoji = self.emojis.get(&emoji_id);
        if let Some(emoji) = &emoji {
            let guild_id = *emoji.read().guild_id();
            if let Some(guild) = self.guilds.get(&guild_id) {
                guild.write().emojis_mut().remove(&emoji_id);
            }
            debug!(guild_id, "Deleted guild emoji");
        }
        self.emojis.remove(&emoji_id);
        emoji
    }
}
