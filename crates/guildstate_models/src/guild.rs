//! Guilds and the collections they own.

use crate::{Channel, GuildEmoji, GuildPayload, Handle, Member, Role, Snowflake};
use std::collections::HashMap;

/// A guild and its owned children.
///
/// The guild is the single strong owner of its channels, roles, members
/// and emoji. Flat lookup indices elsewhere only borrow them.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct Guild {
    id: Snowflake,
    name: String,
    owner_id: Option<Snowflake>,
    icon: Option<String>,
    unavailable: bool,
    member_count: Option<u64>,
    channels: HashMap<Snowflake, Handle<Channel>>,
    roles: HashMap<Snowflake, Handle<Role>>,
    members: HashMap<Snowflake, Handle<Member>>,
    emojis: HashMap<Snowflake, Handle<GuildEmoji>>,
}

impl Guild {
    /// Build a guild without children from its first snapshot.
    pub fn from_payload(payload: &GuildPayload) -> Self {
        let mut guild = Self {
            id: *payload.id(),
            name: String::new(),
            owner_id: None,
            icon: None,
            unavailable: false,
            member_count: None,
            channels: HashMap::new(),
            roles: HashMap::new(),
            members: HashMap::new(),
            emojis: HashMap::new(),
        };
        guild.apply(payload);
        guild
    }

    /// Fold the scalar fields present in `payload` into this guild.
    ///
    /// A snapshot without the outage flag means the guild is available.
    pub fn apply(&mut self, payload: &GuildPayload) {
        if let Some(name) = payload.name() {
            self.name = name.clone();
        }
        if let Some(owner_id) = payload.owner_id() {
            self.owner_id = Some(*owner_id);
        }
        if let Some(icon) = payload.icon() {
            self.icon = Some(icon.clone());
        }
        if let Some(member_count) = payload.member_count() {
            self.member_count = Some(*member_count);
        }
        self.unavailable = payload.unavailable().unwrap_or(false);
    }

    /// Mark the guild as (un)available without touching its children.
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Owned channels.
    pub fn channels_mut(&mut self) -> &mut HashMap<Snowflake, Handle<Channel>> {
        &mut self.channels
    }

    /// Owned roles.
    pub fn roles_mut(&mut self) -> &mut HashMap<Snowflake, Handle<Role>> {
        &mut self.roles
    }

    /// Owned members, keyed by user id.
    pub fn members_mut(&mut self) -> &mut HashMap<Snowflake, Handle<Member>> {
        &mut self.members
    }

    /// Owned custom emoji.
    pub fn emojis_mut(&mut self) -> &mut HashMap<Snowflake, Handle<GuildEmoji>> {
        &mut self.emojis
    }
}
