//! Roles and the role cascade.

use crate::{Diff, StateRegistry};
use guildstate_error::GuildStateResult;
use guildstate_models::{Handle, Member, Role, RolePayload, Snowflake, handle};
use tracing::{debug, instrument};

impl StateRegistry {
    /// Create a role in `guild_id`, or update the existing one in place.
    ///
    /// # Errors
    ///
    /// Fails when the guild is not cached.
    #[instrument(skip(self, payload), fields(role_id = payload.id()))]
    pub fn parse_role(
        &mut self,
        payload: &RolePayload,
        guild_id: Snowflake,
    ) -> GuildStateResult<Handle<Role>> {
        let guild = self.require_guild("role", *payload.id(), guild_id)?;
        let existing = guild.read().roles().get(payload.id()).cloned();
        if let Some(role) = existing {
            role.write().apply(payload);
            return Ok(role);
        }
        let role = handle(Role::from_payload(payload, guild_id));
        guild.write().roles_mut().insert(*payload.id(), role.clone());
        debug!("Registered role");
        Ok(role)
    }

    /// Apply a role delta. Returns `None` when the role is not cached.
    #[instrument(skip(self, payload), fields(role_id = payload.id()))]
    pub fn update_role(&mut self, guild_id: Snowflake, payload: &RolePayload) -> Option<Diff<Role>> {
        let live = self.get_role_by_id(guild_id, *payload.id())?;
        let old = live.read().clone();
        live.write().apply(payload);
        Some(Diff::pair(old, live))
    }

    /// Remove a role from its guild and from every member holding it.
    ///
    /// The member sweep runs even when the guild no longer lists the role,
    /// so stale references are cleared too. Deleting twice is a no-op.
    #[instrument(skip(self))]
    pub fn delete_role(&mut self, guild_id: Snowflake, role_id: Snowflake) -> Option<Handle<Role>> {
        let guild = self.guilds.get(&guild_id)?.clone();
        let removed = guild.write().roles_mut().remove(&role_id);
        let members: Vec<Handle<Member>> = guild.read().members().values().cloned().collect();
        let stripped = members
            .iter()
            .filter(|member| member.write().remove_role(role_id))
            .count();
        debug!(stripped, found = removed.is_some(), "Deleted role");
        removed
    }
}
