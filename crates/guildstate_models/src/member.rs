//! Guild members.

use crate::{Handle, MemberPayload, Presence, Role, Snowflake, User};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// A user's membership in one guild.
///
/// `roles` holds handles into the owning guild's role collection, so a
/// renamed role is visible through every member holding it.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct Member {
    id: Snowflake,
    guild_id: Snowflake,
    user: Handle<User>,
    roles: Vec<Handle<Role>>,
    nick: Option<String>,
    joined_at: Option<DateTime<Utc>>,
    deaf: bool,
    mute: bool,
    presence: Option<Presence>,
}

impl Member {
    /// Build a member from its first snapshot.
    ///
    /// `user` and `roles` are resolved by the caller, which knows where
    /// those entities live.
    pub fn new(
        payload: &MemberPayload,
        guild_id: Snowflake,
        user: Handle<User>,
        roles: Vec<Handle<Role>>,
    ) -> Self {
        Self {
            id: *payload.user().id(),
            guild_id,
            user,
            roles,
            nick: payload.nick().clone(),
            joined_at: *payload.joined_at(),
            deaf: payload.deaf().unwrap_or(false),
            mute: payload.mute().unwrap_or(false),
            presence: None,
        }
    }

    /// Replace the role list and nickname, leaving everything else alone.
    pub fn update_state(&mut self, roles: Vec<Handle<Role>>, nick: Option<String>) {
        self.roles = roles;
        self.nick = nick;
    }

    /// Replace the role list.
    pub fn set_roles(&mut self, roles: Vec<Handle<Role>>) {
        self.roles = roles;
    }

    /// Drop every reference to `role_id`. Returns whether one was held.
    pub fn remove_role(&mut self, role_id: Snowflake) -> bool {
        let before = self.roles.len();
        self.roles.retain(|role| *role.read().id() != role_id);
        self.roles.len() != before
    }

    /// Whether the member holds `role_id`.
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.roles.iter().any(|role| *role.read().id() == role_id)
    }

    /// Whether the member holds this exact role handle.
    pub fn holds(&self, role: &Handle<Role>) -> bool {
        self.roles.iter().any(|held| Arc::ptr_eq(held, role))
    }

    /// Ids of the held roles, in order.
    pub fn role_ids(&self) -> Vec<Snowflake> {
        self.roles.iter().map(|role| *role.read().id()).collect()
    }

    /// Replace the presence, returning the previous one.
    pub fn set_presence(&mut self, presence: Presence) -> Option<Presence> {
        self.presence.replace(presence)
    }
}
