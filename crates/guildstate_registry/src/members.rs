//! Members and their presence.

use crate::{Diff, PresenceDiff, StateRegistry};
use guildstate_error::GuildStateResult;
use guildstate_models::{
    Guild, Handle, Member, MemberPayload, Presence, PresencePayload, Role, Snowflake, handle,
};
use tracing::{debug, instrument, warn};

impl StateRegistry {
    /// Create a member of `guild_id`, or refresh its roles and nickname.
    ///
    /// The member's user is parsed as well, so the guild becomes one of its
    /// strong holders. Role ids the guild does not know are skipped.
    ///
    /// # Errors
    ///
    /// Fails when the guild is not cached.
    #[instrument(skip(self, payload), fields(user_id = payload.user().id()))]
    pub fn parse_member(
        &mut self,
        payload: &MemberPayload,
        guild_id: Snowflake,
    ) -> GuildStateResult<Handle<Member>> {
        let user_id = *payload.user().id();
        let guild = self.require_guild("member", user_id, guild_id)?;
        let user = self.parse_user(payload.user());
        let roles = resolve_roles(&guild, payload.roles());

        let existing = guild.read().members().get(&user_id).cloned();
        if let Some(member) = existing {
            member.write().update_state(roles, payload.nick().clone());
            return Ok(member);
        }
        let member = handle(Member::new(payload, guild_id, user, roles));
        guild.write().members_mut().insert(user_id, member.clone());
        debug!("Registered member");
        Ok(member)
    }

    /// Replace a member's roles and nickname, keeping everything else.
    ///
    /// Returns `None` when the member is not cached.
    #[instrument(skip(self, role_ids, nick))]
    pub fn update_member(
        &mut self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_ids: &[Snowflake],
        nick: Option<String>,
    ) -> Option<Diff<Member>> {
        let guild = self.guilds.get(&guild_id)?.clone();
        let live = guild.read().members().get(&user_id).cloned()?;
        let roles = resolve_roles(&guild, role_ids);
        let old = live.read().clone();
        live.write().update_state(roles, nick);
        Some(Diff::pair(old, live))
    }

    /// Replace a member's role list. Returns whether the member exists.
    #[instrument(skip(self, role_ids))]
    pub fn set_roles_for_member(
        &mut self,
        guild_id: Snowflake,
        user_id: Snowflake,
        role_ids: &[Snowflake],
    ) -> bool {
        let Some(guild) = self.guilds.get(&guild_id).cloned() else {
            return false;
        };
        let Some(member) = guild.read().members().get(&user_id).cloned() else {
            return false;
        };
        let roles = resolve_roles(&guild, role_ids);
        member.write().set_roles(roles);
        true
    }

    /// Remove a member from its guild. Returns whether one was removed.
    ///
    /// The user's index entry goes with it unless something else, such as
    /// another guild or a cached message, still holds the user.
    #[instrument(skip(self))]
    pub fn delete_member(&mut self, guild_id: Snowflake, user_id: Snowflake) -> bool {
        let Some(guild) = self.guilds.get(&guild_id).cloned() else {
            return false;
        };
        let removed = guild.write().members_mut().remove(&user_id);
        let found = removed.is_some();
        drop(removed);
        self.release_user(user_id);
        if found {
            debug!("Deleted member");
        }
        found
    }

    /// Set the presence of the member a presence snapshot describes.
    ///
    /// `guild_id` overrides the payload's own guild id. Returns `None` when
    /// the member is not cached.
    #[instrument(skip(self, payload), fields(user_id = payload.user().id()))]
    pub fn parse_presence(
        &mut self,
        payload: &PresencePayload,
        guild_id: Option<Snowflake>,
    ) -> Option<Presence> {
        let guild_id = guild_id.or(*payload.guild_id())?;
        let member = self.get_member_by_id(*payload.user().id(), guild_id)?;
        let presence = Presence::from_payload(payload);
        member.write().set_presence(presence.clone());
        Some(presence)
    }

    /// Replace a member's presence, returning the member with both states.
    #[instrument(skip(self, payload), fields(user_id = payload.user().id()))]
    pub fn update_member_presence(
        &mut self,
        guild_id: Snowflake,
        payload: &PresencePayload,
    ) -> Option<PresenceDiff> {
        let member = self.get_member_by_id(*payload.user().id(), guild_id)?;
        let presence = Presence::from_payload(payload);
        let old = member.write().set_presence(presence.clone());
        Some(PresenceDiff::from_parts(member, old, presence))
    }
}

/// Look up each id among the guild's roles, skipping unknown ones.
fn resolve_roles(guild: &Handle<Guild>, role_ids: &[Snowflake]) -> Vec<Handle<Role>> {
    let guild = guild.read();
    role_ids
        .iter()
        .filter_map(|role_id| {
            let role = guild.roles().get(role_id).cloned();
            if role.is_none() {
                warn!(role_id, guild_id = guild.id(), "Member references unknown role");
            }
            role
        })
        .collect()
}
