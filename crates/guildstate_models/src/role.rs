//! Guild roles.

use crate::{Permissions, RolePayload, Snowflake};

/// A role belonging to one guild.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct Role {
    id: Snowflake,
    guild_id: Snowflake,
    name: String,
    color: u32,
    hoist: bool,
    position: i64,
    permissions: Permissions,
    managed: bool,
    mentionable: bool,
}

impl Role {
    /// Build a role owned by `guild_id` from its first snapshot.
    pub fn from_payload(payload: &RolePayload, guild_id: Snowflake) -> Self {
        let mut role = Self {
            id: *payload.id(),
            guild_id,
            name: String::new(),
            color: 0,
            hoist: false,
            position: 0,
            permissions: Permissions::empty(),
            managed: false,
            mentionable: false,
        };
        role.apply(payload);
        role
    }

    /// Fold the fields present in `payload` into this role.
    pub fn apply(&mut self, payload: &RolePayload) {
        if let Some(name) = payload.name() {
            self.name = name.clone();
        }
        if let Some(color) = payload.color() {
            self.color = *color;
        }
        if let Some(hoist) = payload.hoist() {
            self.hoist = *hoist;
        }
        if let Some(position) = payload.position() {
            self.position = *position;
        }
        if let Some(bits) = payload.permissions() {
            self.permissions = Permissions::from_bits_retain(*bits);
        }
        if let Some(managed) = payload.managed() {
            self.managed = *managed;
        }
        if let Some(mentionable) = payload.mentionable() {
            self.mentionable = *mentionable;
        }
    }
}
