//! Channels of every kind.
//!
//! All kinds share one [`Channel`] struct; what differs between them lives
//! in [`ChannelDetails`]. The numeric `type` discriminant is mapped to a
//! kind by [`ChannelType::try_from`], and to a details constructor by
//! [`ChannelDetails::from_payload`].

use crate::{ChannelPayload, Handle, OverwritePayload, Permissions, Snowflake, User};
use guildstate_error::{PayloadError, PayloadErrorKind};
use serde::{Deserialize, Serialize};

/// Channel kind, keyed by the remote service's discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[repr(u8)]
pub enum ChannelType {
    /// Text channel in a guild
    #[display("guild-text")]
    GuildText = 0,
    /// One-to-one direct message
    #[display("direct")]
    Direct = 1,
    /// Voice channel in a guild
    #[display("guild-voice")]
    GuildVoice = 2,
    /// Group direct message
    #[display("group-direct")]
    GroupDirect = 3,
    /// Category grouping other guild channels
    #[display("guild-category")]
    GuildCategory = 4,
    /// Announcement channel in a guild
    #[display("guild-news")]
    GuildNews = 5,
    /// Store listing channel in a guild
    #[display("guild-store")]
    GuildStore = 6,
}

impl ChannelType {
    /// Direct-like kinds live in the bounded DM index instead of a guild.
    pub fn is_direct(self) -> bool {
        matches!(self, ChannelType::Direct | ChannelType::GroupDirect)
    }
}

impl TryFrom<u8> for ChannelType {
    type Error = PayloadError;

    #[track_caller]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ChannelType::GuildText),
            1 => Ok(ChannelType::Direct),
            2 => Ok(ChannelType::GuildVoice),
            3 => Ok(ChannelType::GroupDirect),
            4 => Ok(ChannelType::GuildCategory),
            5 => Ok(ChannelType::GuildNews),
            6 => Ok(ChannelType::GuildStore),
            other => Err(PayloadError::new(PayloadErrorKind::UnknownChannelType(
                other,
            ))),
        }
    }
}

/// Whether an overwrite targets a role or a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverwriteKind {
    /// Role overwrite
    Role,
    /// Member overwrite
    Member,
}

/// Channel-level permission adjustment for one role or member.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PermissionOverwrite {
    id: Snowflake,
    kind: OverwriteKind,
    allow: Permissions,
    deny: Permissions,
}

impl PermissionOverwrite {
    /// Build an overwrite from its snapshot.
    pub fn from_payload(payload: &OverwritePayload) -> Self {
        Self {
            id: *payload.id(),
            kind: *payload.kind(),
            allow: Permissions::from_bits_retain(payload.allow().unwrap_or(0)),
            deny: Permissions::from_bits_retain(payload.deny().unwrap_or(0)),
        }
    }
}

/// Fields specific to each channel kind.
#[derive(Debug, Clone)]
pub enum ChannelDetails {
    /// Guild text channel
    GuildText {
        /// Channel topic
        topic: Option<String>,
        /// Age-restricted flag
        nsfw: bool,
        /// Slowmode in seconds
        rate_limit_per_user: u32,
    },
    /// One-to-one direct message
    Direct {
        /// The other party (and the bot, when the service includes it)
        recipients: Vec<Handle<User>>,
    },
    /// Guild voice channel
    GuildVoice {
        /// Bitrate in bits per second
        bitrate: Option<u32>,
        /// Maximum users, `None` when unlimited
        user_limit: Option<u32>,
    },
    /// Group direct message
    GroupDirect {
        /// Participants
        recipients: Vec<Handle<User>>,
        /// Current owner
        owner_id: Option<Snowflake>,
        /// Icon hash
        icon_hash: Option<String>,
        /// Creating application, if a bot made the group
        application_id: Option<Snowflake>,
    },
    /// Guild category
    GuildCategory,
    /// Guild announcement channel
    GuildNews {
        /// Channel topic
        topic: Option<String>,
        /// Age-restricted flag
        nsfw: bool,
    },
    /// Guild store channel
    GuildStore {
        /// Age-restricted flag
        nsfw: bool,
    },
}

impl ChannelDetails {
    /// Build the details for `kind` from a first snapshot.
    pub fn from_payload(
        kind: ChannelType,
        payload: &ChannelPayload,
        recipients: Vec<Handle<User>>,
    ) -> Self {
        let mut details = match kind {
            ChannelType::GuildText => ChannelDetails::GuildText {
                topic: None,
                nsfw: false,
                rate_limit_per_user: 0,
            },
            ChannelType::Direct => ChannelDetails::Direct { recipients },
            ChannelType::GuildVoice => ChannelDetails::GuildVoice {
                bitrate: None,
                user_limit: None,
            },
            ChannelType::GroupDirect => ChannelDetails::GroupDirect {
                recipients,
                owner_id: None,
                icon_hash: None,
                application_id: None,
            },
            ChannelType::GuildCategory => ChannelDetails::GuildCategory,
            ChannelType::GuildNews => ChannelDetails::GuildNews {
                topic: None,
                nsfw: false,
            },
            ChannelType::GuildStore => ChannelDetails::GuildStore { nsfw: false },
        };
        details.apply(payload, None);
        details
    }

    /// The kind these details belong to.
    pub fn kind(&self) -> ChannelType {
        match self {
            ChannelDetails::GuildText { .. } => ChannelType::GuildText,
            ChannelDetails::Direct { .. } => ChannelType::Direct,
            ChannelDetails::GuildVoice { .. } => ChannelType::GuildVoice,
            ChannelDetails::GroupDirect { .. } => ChannelType::GroupDirect,
            ChannelDetails::GuildCategory => ChannelType::GuildCategory,
            ChannelDetails::GuildNews { .. } => ChannelType::GuildNews,
            ChannelDetails::GuildStore { .. } => ChannelType::GuildStore,
        }
    }

    /// Fold the kind-specific fields present in `payload`.
    ///
    /// Recipients are only replaced when the caller resolved a new list.
    pub fn apply(&mut self, payload: &ChannelPayload, new_recipients: Option<Vec<Handle<User>>>) {
        match self {
            ChannelDetails::GuildText {
                topic,
                nsfw,
                rate_limit_per_user,
            } => {
                if let Some(value) = payload.topic() {
                    *topic = Some(value.clone());
                }
                if let Some(value) = payload.nsfw() {
                    *nsfw = *value;
                }
                if let Some(value) = payload.rate_limit_per_user() {
                    *rate_limit_per_user = *value;
                }
            }
            ChannelDetails::Direct { recipients } => {
                if let Some(list) = new_recipients {
                    *recipients = list;
                }
            }
            ChannelDetails::GuildVoice {
                bitrate,
                user_limit,
            } => {
                if let Some(value) = payload.bitrate() {
                    *bitrate = Some(*value).filter(|rate| *rate > 0);
                }
                if let Some(value) = payload.user_limit() {
                    *user_limit = Some(*value).filter(|limit| *limit > 0);
                }
            }
            ChannelDetails::GroupDirect {
                recipients,
                owner_id,
                icon_hash,
                application_id,
            } => {
                if let Some(list) = new_recipients {
                    *recipients = list;
                }
                if let Some(value) = payload.owner_id() {
                    *owner_id = Some(*value);
                }
                if let Some(value) = payload.icon() {
                    *icon_hash = Some(value.clone());
                }
                if let Some(value) = payload.application_id() {
                    *application_id = Some(*value);
                }
            }
            ChannelDetails::GuildCategory => {}
            ChannelDetails::GuildNews { topic, nsfw } => {
                if let Some(value) = payload.topic() {
                    *topic = Some(value.clone());
                }
                if let Some(value) = payload.nsfw() {
                    *nsfw = *value;
                }
            }
            ChannelDetails::GuildStore { nsfw } => {
                if let Some(value) = payload.nsfw() {
                    *nsfw = *value;
                }
            }
        }
    }

    /// Recipients of a direct-like channel; empty for guild kinds.
    pub fn recipients(&self) -> &[Handle<User>] {
        match self {
            ChannelDetails::Direct { recipients }
            | ChannelDetails::GroupDirect { recipients, .. } => recipients,
            _ => &[],
        }
    }
}

/// A channel of any kind.
#[derive(Debug, Clone, derive_getters::Getters)]
pub struct Channel {
    id: Snowflake,
    guild_id: Option<Snowflake>,
    name: Option<String>,
    position: Option<i64>,
    parent_id: Option<Snowflake>,
    permission_overwrites: Vec<PermissionOverwrite>,
    last_message_id: Option<Snowflake>,
    details: ChannelDetails,
}

impl Channel {
    /// Build a channel from its first snapshot.
    ///
    /// `guild_id` overrides the payload's own field, since channels embedded
    /// in a guild snapshot omit it.
    pub fn new(
        kind: ChannelType,
        payload: &ChannelPayload,
        guild_id: Option<Snowflake>,
        recipients: Vec<Handle<User>>,
    ) -> Self {
        let mut channel = Self {
            id: *payload.id(),
            guild_id: if kind.is_direct() { None } else { guild_id },
            name: None,
            position: None,
            parent_id: None,
            permission_overwrites: Vec::new(),
            last_message_id: None,
            details: ChannelDetails::from_payload(kind, payload, recipients),
        };
        channel.apply_common(payload);
        channel
    }

    /// Fold `payload` into this channel. Id, kind and guild never change.
    pub fn apply(&mut self, payload: &ChannelPayload, recipients: Option<Vec<Handle<User>>>) {
        self.apply_common(payload);
        self.details.apply(payload, recipients);
    }

    /// Switch to another kind, keeping id, common fields and identity.
    ///
    /// Kind-specific fields are rebuilt from `payload`; `guild_id` is
    /// cleared for direct kinds.
    pub fn change_kind(
        &mut self,
        kind: ChannelType,
        payload: &ChannelPayload,
        guild_id: Option<Snowflake>,
        recipients: Vec<Handle<User>>,
    ) {
        self.guild_id = if kind.is_direct() { None } else { guild_id };
        self.details = ChannelDetails::from_payload(kind, payload, recipients);
        self.apply_common(payload);
    }

    /// Channel kind.
    pub fn kind(&self) -> ChannelType {
        self.details.kind()
    }

    /// Whether the channel lives in the bounded DM index.
    pub fn is_direct(&self) -> bool {
        self.kind().is_direct()
    }

    /// Record the newest message seen in this channel.
    pub fn set_last_message_id(&mut self, message_id: Snowflake) {
        self.last_message_id = Some(message_id);
    }

    fn apply_common(&mut self, payload: &ChannelPayload) {
        if let Some(name) = payload.name() {
            self.name = Some(name.clone());
        }
        if let Some(position) = payload.position() {
            self.position = Some(*position);
        }
        if let Some(parent_id) = payload.parent_id() {
            self.parent_id = Some(*parent_id);
        }
        if let Some(overwrites) = payload.permission_overwrites() {
            self.permission_overwrites = overwrites
                .iter()
                .map(PermissionOverwrite::from_payload)
                .collect();
        }
        if let Some(last_message_id) = payload.last_message_id() {
            self.last_message_id = Some(*last_message_id);
        }
    }
}
