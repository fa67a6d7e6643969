//! Guild snapshots and the guild-level cascade.

use crate::{Diff, StateRegistry};
use guildstate_error::GuildStateResult;
use guildstate_models::{ChannelType, Guild, GuildPayload, Handle, Snowflake, handle};
use tracing::{debug, instrument};

impl StateRegistry {
    /// Create a guild from its first snapshot, or fold a later one in.
    ///
    /// Embedded children are parsed in dependency order: roles, channels,
    /// emoji, members, then presences. A snapshot flagged unavailable for a
    /// known guild only marks the outage and leaves the children alone.
    ///
    /// # Errors
    ///
    /// Fails before touching the registry when an embedded channel has an
    /// unknown `type` discriminant.
    #[instrument(skip(self, payload), fields(guild_id = payload.id()))]
    pub fn parse_guild(&mut self, payload: &GuildPayload) -> GuildStateResult<Handle<Guild>> {
        let guild_id = *payload.id();
        validate_channels(payload)?;

        if let Some(guild) = self.guilds.get(&guild_id).cloned() {
            if payload.unavailable().unwrap_or(false) {
                self.set_guild_unavailability(guild_id, true);
                return Ok(guild);
            }
            guild.write().apply(payload);
            self.parse_guild_children(guild_id, payload)?;
            return Ok(guild);
        }

        let guild = handle(Guild::from_payload(payload));
        self.guilds.insert(guild_id, guild.clone());
        self.parse_guild_children(guild_id, payload)?;
        debug!(
            roles = payload.roles().len(),
            channels = payload.channels().len(),
            members = payload.members().len(),
            "Registered guild"
        );
        Ok(guild)
    }

    /// Apply a guild delta. Returns `Ok(None)` when the guild is not cached.
    ///
    /// # Errors
    ///
    /// Fails before mutating when an embedded channel has an unknown `type`
    /// discriminant.
    #[instrument(skip(self, payload), fields(guild_id = payload.id()))]
    pub fn update_guild(&mut self, payload: &GuildPayload) -> GuildStateResult<Option<Diff<Guild>>> {
        validate_channels(payload)?;
        let Some(live) = self.guilds.get(payload.id()).cloned() else {
            return Ok(None);
        };
        let old = live.read().clone();
        live.write().apply(payload);
        self.parse_guild_children(*payload.id(), payload)?;
        Ok(Some(Diff::pair(old, live)))
    }

    /// Flag a guild as (un)available. Returns whether the guild is cached.
    #[instrument(skip(self))]
    pub fn set_guild_unavailability(&mut self, guild_id: Snowflake, unavailable: bool) -> bool {
        match self.guilds.get(&guild_id) {
            Some(guild) => {
                guild.write().set_unavailable(unavailable);
                true
            }
            None => false,
        }
    }

    /// Remove a guild and everything it owns from every index.
    ///
    /// Returns whether the guild was cached. Cached messages that belong to
    /// the guild stay in the message cache until evicted or deleted.
    #[instrument(skip(self))]
    pub fn delete_guild(&mut self, guild_id: Snowflake) -> bool {
        let Some(guild) = self.guilds.remove(&guild_id) else {
            return false;
        };
        let (channel_ids, emoji_ids, user_ids) = {
            let guild = guild.read();
            (
                guild.channels().keys().copied().collect::<Vec<_>>(),
                guild.emojis().keys().copied().collect::<Vec<_>>(),
                guild.members().keys().copied().collect::<Vec<_>>(),
            )
        };
        for channel_id in &channel_ids {
            self.guild_channels.remove(channel_id);
        }
        for emoji_id in &emoji_ids {
            self.emojis.remove(emoji_id);
        }
        drop(guild);
        for user_id in &user_ids {
            self.release_user(*user_id);
        }
        debug!(
            channels = channel_ids.len(),
            emojis = emoji_ids.len(),
            members = user_ids.len(),
            "Deleted guild"
        );
        true
    }

    fn parse_guild_children(
        &mut self,
        guild_id: Snowflake,
        payload: &GuildPayload,
    ) -> GuildStateResult<()> {
        for role in payload.roles() {
            self.parse_role(role, guild_id)?;
        }
        for channel in payload.channels() {
            self.parse_channel(channel, Some(guild_id))?;
        }
        for emoji in payload.emojis() {
            self.parse_emoji(emoji, Some(guild_id))?;
        }
        for member in payload.members() {
            self.parse_member(member, guild_id)?;
        }
        for presence in payload.presences() {
            self.parse_presence(presence, Some(guild_id));
        }
        Ok(())
    }
}

fn validate_channels(payload: &GuildPayload) -> GuildStateResult<()> {
    for channel in payload.channels() {
        ChannelType::try_from(*channel.kind())?;
    }
    Ok(())
}
