//! Entity and snapshot models for the guildstate entity cache.
//!
//! Two families of types live here:
//!
//! - **Payloads** (`*Payload`) are the raw snapshots handed over by the
//!   ingestion layer. They deserialize from the remote service's JSON and
//!   carry optional fields so that full snapshots and partial deltas share
//!   one type.
//! - **Entities** (`Guild`, `Channel`, `Member`, ...) are the live mirrored
//!   objects. They are shared as [`Handle`]s so that a caller holding one
//!   observes later in-place updates, and they know how to fold a payload
//!   into themselves. Relational wiring (which collection owns what) is
//!   the registry's job, not theirs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channel;
mod emoji;
mod guild;
mod handle;
mod member;
mod message;
mod payload;
mod permissions;
mod presence;
mod reaction;
mod role;
mod snowflake;
mod user;

pub use channel::{Channel, ChannelDetails, ChannelType, OverwriteKind, PermissionOverwrite};
pub use emoji::{Emoji, EmojiKey, GuildEmoji};
pub use guild::Guild;
pub use handle::{Handle, Snowflake, handle};
pub use member::Member;
pub use message::Message;
pub use payload::{
    ChannelPayload, EmojiPayload, GuildPayload, MemberPayload, MessagePayload, OverwritePayload,
    PresencePayload, PresenceUserPayload, ReactionPayload, RolePayload, UserPayload, decode,
};
pub use permissions::Permissions;
pub use presence::{Activity, Presence, Status};
pub use reaction::Reaction;
pub use role::Role;
pub use user::{BotUser, User};
