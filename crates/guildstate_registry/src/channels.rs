//! Channel upsert, update and delete.

use crate::ownership::{ChannelHome, channel_home};
use crate::{Diff, StateRegistry};
use guildstate_error::GuildStateResult;
use guildstate_models::{Channel, ChannelPayload, ChannelType, Handle, Snowflake, User, handle};
use tracing::{debug, instrument};

impl StateRegistry {
    /// Create a channel from its first snapshot, or update it in place.
    ///
    /// `guild_id` overrides the payload's own guild id. Guild kinds are
    /// placed in their guild's channel map and the flat channel index in
    /// the same call; direct kinds go to the bounded DM cache.
    ///
    /// # Errors
    ///
    /// Fails without registering anything when the `type` discriminant is
    /// unknown, or when a guild kind names no guild or an uncached one. A
    /// cached channel that fails re-placement keeps its current state.
    #[instrument(skip(self, payload), fields(channel_id = payload.id(), kind = payload.kind()))]
    pub fn parse_channel(
        &mut self,
        payload: &ChannelPayload,
        guild_id: Option<Snowflake>,
    ) -> GuildStateResult<Handle<Channel>> {
        let kind = ChannelType::try_from(*payload.kind())?;
        let channel_id = *payload.id();
        let guild_id = guild_id.or(*payload.guild_id());

        if let Some(existing) = self.find_channel(channel_id) {
            self.refresh_channel(&existing, kind, payload, guild_id)?;
            return Ok(existing);
        }

        let home = channel_home(kind, channel_id, guild_id)?;
        match home {
            ChannelHome::Guild(guild_id) => {
                let guild = self.require_guild("channel", channel_id, guild_id)?;
                let channel = handle(Channel::new(kind, payload, Some(guild_id), Vec::new()));
                guild
                    .write()
                    .channels_mut()
                    .insert(channel_id, channel.clone());
                self.guild_channels.put(channel_id, &channel);
                debug!(guild_id, "Registered guild channel");
                Ok(channel)
            }
            ChannelHome::DirectIndex => {
                let recipients = self.parse_recipients(kind, payload).unwrap_or_default();
                let channel = handle(Channel::new(kind, payload, None, recipients));
                if let Some((evicted_id, _)) = self.dm_channels.put(channel_id, channel.clone()) {
                    debug!(evicted_id, "Evicted direct channel");
                }
                debug!("Registered direct channel");
                Ok(channel)
            }
        }
    }

    /// Apply a channel delta to an already known channel.
    ///
    /// Returns `Ok(None)` when the channel is not cached.
    ///
    /// # Errors
    ///
    /// Fails when the `type` discriminant is unknown, or when a direct
    /// channel turns into a guild kind that cannot be placed. The cached
    /// channel is left untouched in both cases.
    #[instrument(skip(self, payload), fields(channel_id = payload.id()))]
    pub fn update_channel(
        &mut self,
        payload: &ChannelPayload,
    ) -> GuildStateResult<Option<Diff<Channel>>> {
        let kind = ChannelType::try_from(*payload.kind())?;
        let Some(live) = self.find_channel(*payload.id()) else {
            return Ok(None);
        };
        let old = live.read().clone();
        self.refresh_channel(&live, kind, payload, *payload.guild_id())?;
        Ok(Some(Diff::pair(old, live)))
    }

    /// Remove a channel from its owner and from every index.
    ///
    /// Deleting an unknown channel is a no-op.
    #[instrument(skip(self))]
    pub fn delete_channel(&mut self, channel_id: Snowflake) -> Option<Handle<Channel>> {
        if let Some(channel) = self.guild_channels.get(&channel_id) {
            let guild_id = *channel.read().guild_id();
            if let Some(guild) = guild_id.and_then(|id| self.guilds.get(&id)) {
                guild.write().channels_mut().remove(&channel_id);
            }
            self.guild_channels.remove(&channel_id);
            debug!(?guild_id, "Deleted guild channel");
            return Some(channel);
        }
        self.guild_channels.remove(&channel_id);
        let removed = self.dm_channels.remove(&channel_id);
        if removed.is_some() {
            debug!("Deleted direct channel");
        }
        removed
    }

    /// Fold `payload` into a cached channel, keeping its handle.
    ///
    /// A kind change within the same home rebuilds the kind-specific
    /// fields in place. Guild channels stay with their guild. Only a move
    /// between a guild and the DM index relocates the channel, and only
    /// once the new placement is known to exist.
    fn refresh_channel(
        &mut self,
        live: &Handle<Channel>,
        kind: ChannelType,
        payload: &ChannelPayload,
        guild_id: Option<Snowflake>,
    ) -> GuildStateResult<()> {
        let channel_id = *payload.id();
        let (live_kind, live_guild_id) = {
            let channel = live.read();
            (channel.kind(), *channel.guild_id())
        };

        if live_kind == kind {
            let recipients = self.parse_recipients(kind, payload);
            live.write().apply(payload, recipients);
            if kind.is_direct() {
                self.dm_channels.put(channel_id, live.clone());
            }
            return Ok(());
        }

        debug!(%live_kind, %kind, "Channel changed kind");
        match (live_kind.is_direct(), kind.is_direct()) {
            (false, false) => {
                live.write().change_kind(kind, payload, live_guild_id, Vec::new());
            }
            (true, true) => {
                let recipients = match self.parse_recipients(kind, payload) {
                    Some(recipients) => recipients,
                    None => live.read().details().recipients().to_vec(),
                };
                live.write().change_kind(kind, payload, None, recipients);
                self.dm_channels.put(channel_id, live.clone());
            }
            (true, false) => {
                let home = channel_home(kind, channel_id, guild_id)?;
                let ChannelHome::Guild(guild_id) = home else {
                    return Ok(());
                };
                let guild = self.require_guild("channel", channel_id, guild_id)?;
                self.dm_channels.remove(&channel_id);
                live.write().change_kind(kind, payload, Some(guild_id), Vec::new());
                guild.write().channels_mut().insert(channel_id, live.clone());
                self.guild_channels.put(channel_id, live);
                debug!(guild_id, "Moved direct channel into guild");
            }
            (false, true) => {
                if let Some(guild) = live_guild_id.and_then(|id| self.guilds.get(&id)) {
                    guild.write().channels_mut().remove(&channel_id);
                }
                self.guild_channels.remove(&channel_id);
                let recipients = self.parse_recipients(kind, payload).unwrap_or_default();
                live.write().change_kind(kind, payload, None, recipients);
                if let Some((evicted_id, _)) = self.dm_channels.put(channel_id, live.clone()) {
                    debug!(evicted_id, "Evicted direct channel");
                }
                debug!(?live_guild_id, "Moved guild channel into direct index");
            }
        }
        Ok(())
    }

    fn find_channel(&self, channel_id: Snowflake) -> Option<Handle<Channel>> {
        self.guild_channels
            .get(&channel_id)
            .or_else(|| self.dm_channels.peek(&channel_id).cloned())
    }

    fn parse_recipients(
        &mut self,
        kind: ChannelType,
        payload: &ChannelPayload,
    ) -> Option<Vec<Handle<User>>> {
        if !kind.is_direct() {
            return None;
        }
        let recipients = payload.recipients().as_ref()?;
        Some(
            recipients
                .iter()
                .map(|recipient| self.parse_user(recipient))
                .collect(),
        )
    }
}
