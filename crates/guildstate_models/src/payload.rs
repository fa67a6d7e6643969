//! Snapshot payloads as delivered by the ingestion layer.
//!
//! Every payload deserializes from the remote service's JSON. Identifiers
//! arrive as strings or integers. Fields other than the identifier are
//! optional so that a partial delta and a full snapshot share one type;
//! entities only overwrite the fields a payload actually carries.

use crate::Snowflake;
use crate::channel::OverwriteKind;
use crate::presence::{Activity, Status};
use chrono::{DateTime, Utc};
use guildstate_error::JsonError;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Decode a JSON snapshot into a payload.
///
/// # Errors
///
/// Returns [`JsonError`] when the value does not match the payload shape.
///
/// # Example
///
/// ```
/// use guildstate_models::{UserPayload, decode};
/// use serde_json::json;
///
/// let user: UserPayload = decode(json!({"id": "80351110224678912", "username": "nelly"})).unwrap();
/// assert_eq!(*user.id(), 80351110224678912);
/// ```
#[track_caller]
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, JsonError> {
    serde_json::from_value(value).map_err(JsonError::from)
}

/// Snapshot of a user account.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct UserPayload {
    /// User id
    #[serde(deserialize_with = "crate::snowflake::deserialize")]
    id: Snowflake,
    /// Account name
    #[serde(default)]
    username: Option<String>,
    /// Legacy discriminator
    #[serde(default)]
    discriminator: Option<String>,
    /// Avatar hash
    #[serde(default)]
    avatar: Option<String>,
    /// Bot account flag
    #[serde(default)]
    bot: Option<bool>,
    /// Only sent for the authenticated account
    #[serde(default)]
    mfa_enabled: Option<bool>,
    /// Only sent for the authenticated account
    #[serde(default)]
    verified: Option<bool>,
    /// Only sent for the authenticated account
    #[serde(default)]
    locale: Option<String>,
    /// Only sent for the authenticated account
    #[serde(default)]
    email: Option<String>,
}

impl UserPayload {
    /// Whether the payload carries fields exclusive to the authenticated account.
    pub fn is_authenticated_account(&self) -> bool {
        self.mfa_enabled.is_some() || self.verified.is_some()
    }
}

/// Snapshot of a guild role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct RolePayload {
    /// Role id
    #[serde(deserialize_with = "crate::snowflake::deserialize")]
    id: Snowflake,
    /// Role name
    #[serde(default)]
    name: Option<String>,
    /// RGB colour as an integer
    #[serde(default)]
    color: Option<u32>,
    /// Displayed separately in the member list
    #[serde(default)]
    hoist: Option<bool>,
    /// Position in the role hierarchy
    #[serde(default)]
    position: Option<i64>,
    /// Permission bitfield
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    permissions: Option<u64>,
    /// Managed by an integration
    #[serde(default)]
    managed: Option<bool>,
    /// Can be mentioned
    #[serde(default)]
    mentionable: Option<bool>,
}

/// Snapshot of an emoji, custom or unicode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct EmojiPayload {
    /// Custom emoji id; absent for unicode emoji
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    id: Option<Snowflake>,
    /// Emoji name, or the unicode character itself
    #[serde(default)]
    name: Option<String>,
    /// Roles allowed to use the emoji
    #[serde(default, deserialize_with = "crate::snowflake::list::deserialize")]
    roles: Vec<Snowflake>,
    /// Animated emoji flag
    #[serde(default)]
    animated: Option<bool>,
    /// Must be wrapped in colons
    #[serde(default)]
    require_colons: Option<bool>,
    /// Managed by an integration
    #[serde(default)]
    managed: Option<bool>,
    /// Usable right now
    #[serde(default)]
    available: Option<bool>,
}

/// Snapshot of a channel permission overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct OverwritePayload {
    /// Role or user id the overwrite applies to
    #[serde(deserialize_with = "crate::snowflake::deserialize")]
    id: Snowflake,
    /// Whether `id` names a role or a member
    #[serde(rename = "type")]
    kind: OverwriteKind,
    /// Allowed permission bits
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    allow: Option<u64>,
    /// Denied permission bits
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    deny: Option<u64>,
}

/// Snapshot of a channel of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct ChannelPayload {
    /// Channel id
    #[serde(deserialize_with = "crate::snowflake::deserialize")]
    id: Snowflake,
    /// Numeric channel type discriminant
    #[serde(rename = "type")]
    kind: u8,
    /// Owning guild, for guild channels
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    guild_id: Option<Snowflake>,
    /// Channel name
    #[serde(default)]
    name: Option<String>,
    /// Sort position
    #[serde(default)]
    position: Option<i64>,
    /// Parent category
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    parent_id: Option<Snowflake>,
    /// Permission overwrites
    #[serde(default)]
    permission_overwrites: Option<Vec<OverwritePayload>>,
    /// Channel topic
    #[serde(default)]
    topic: Option<String>,
    /// Age-restricted flag
    #[serde(default)]
    nsfw: Option<bool>,
    /// Slowmode in seconds
    #[serde(default)]
    rate_limit_per_user: Option<u32>,
    /// Last message sent in the channel
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    last_message_id: Option<Snowflake>,
    /// Voice bitrate
    #[serde(default)]
    bitrate: Option<u32>,
    /// Voice user limit
    #[serde(default)]
    user_limit: Option<u32>,
    /// Direct-message recipients
    #[serde(default)]
    recipients: Option<Vec<UserPayload>>,
    /// Group icon hash
    #[serde(default)]
    icon: Option<String>,
    /// Group owner
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    owner_id: Option<Snowflake>,
    /// Application that created the group, if any
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    application_id: Option<Snowflake>,
}

/// Snapshot of a guild member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct MemberPayload {
    /// The member's user account
    user: UserPayload,
    /// Role ids held by the member
    #[serde(default, deserialize_with = "crate::snowflake::list::deserialize")]
    roles: Vec<Snowflake>,
    /// Guild nickname
    #[serde(default)]
    nick: Option<String>,
    /// When the member joined
    #[serde(default)]
    joined_at: Option<DateTime<Utc>>,
    /// Server-deafened flag
    #[serde(default)]
    deaf: Option<bool>,
    /// Server-muted flag
    #[serde(default)]
    mute: Option<bool>,
}

/// The user reference carried by a presence update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct PresenceUserPayload {
    /// User id
    #[serde(deserialize_with = "crate::snowflake::deserialize")]
    id: Snowflake,
}

/// Snapshot of a member's presence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct PresencePayload {
    /// Whose presence this is
    user: PresenceUserPayload,
    /// Guild the presence was observed in
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    guild_id: Option<Snowflake>,
    /// Online status
    #[serde(default)]
    status: Status,
    /// Current activities
    #[serde(default)]
    activities: Vec<Activity>,
}

/// Snapshot of a reaction on a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct ReactionPayload {
    /// Message the reaction belongs to; absent when embedded in a message
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    message_id: Option<Snowflake>,
    /// Number of users that reacted
    #[serde(default = "default_reaction_count")]
    count: u32,
    /// Whether the authenticated account reacted
    #[serde(default)]
    me: Option<bool>,
    /// The emoji reacted with
    emoji: EmojiPayload,
}

fn default_reaction_count() -> u32 {
    1
}

/// Snapshot of a message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct MessagePayload {
    /// Message id
    #[serde(deserialize_with = "crate::snowflake::deserialize")]
    id: Snowflake,
    /// Channel the message was sent in
    #[serde(deserialize_with = "crate::snowflake::deserialize")]
    channel_id: Snowflake,
    /// Guild the channel belongs to
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    guild_id: Option<Snowflake>,
    /// Message author
    #[serde(default)]
    author: Option<UserPayload>,
    /// Text content
    #[serde(default)]
    content: Option<String>,
    /// When the message was sent
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
    /// When the message was last edited
    #[serde(default)]
    edited_timestamp: Option<DateTime<Utc>>,
    /// Pinned flag
    #[serde(default)]
    pinned: Option<bool>,
    /// Text-to-speech flag
    #[serde(default)]
    tts: Option<bool>,
    /// Mentions @everyone
    #[serde(default)]
    mention_everyone: Option<bool>,
    /// Reactions present when the snapshot was taken
    #[serde(default)]
    reactions: Vec<ReactionPayload>,
}

/// Snapshot of a guild, optionally carrying its children.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, derive_getters::Getters)]
pub struct GuildPayload {
    /// Guild id
    #[serde(deserialize_with = "crate::snowflake::deserialize")]
    id: Snowflake,
    /// Guild name
    #[serde(default)]
    name: Option<String>,
    /// Owner's user id
    #[serde(default, deserialize_with = "crate::snowflake::option::deserialize")]
    owner_id: Option<Snowflake>,
    /// Icon hash
    #[serde(default)]
    icon: Option<String>,
    /// Outage flag
    #[serde(default)]
    unavailable: Option<bool>,
    /// Total member count
    #[serde(default)]
    member_count: Option<u64>,
    /// Roles
    #[serde(default)]
    roles: Vec<RolePayload>,
    /// Channels; these omit `guild_id`
    #[serde(default)]
    channels: Vec<ChannelPayload>,
    /// Custom emoji
    #[serde(default)]
    emojis: Vec<EmojiPayload>,
    /// Members
    #[serde(default)]
    members: Vec<MemberPayload>,
    /// Member presences
    #[serde(default)]
    presences: Vec<PresencePayload>,
}
