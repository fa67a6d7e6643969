//! Placement rules: which collection owns an entity.
//!
//! These functions hold no state. The registry asks them where an entity
//! of a given kind belongs, then performs the insertions itself so that
//! the owning collection and any lookup index change together.

use guildstate_error::{PayloadError, PayloadErrorKind};
use guildstate_models::{ChannelType, Snowflake, UserPayload};

/// Where a channel lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelHome {
    /// Bounded DM index; no guild involved.
    DirectIndex,
    /// The guild's channel map, mirrored in the weak channel index.
    Guild(Snowflake),
}

/// Where an emoji lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiHome {
    /// Built on demand and owned by whoever asked for it.
    Transient,
    /// The guild's emoji map, mirrored in the weak emoji index.
    Guild {
        /// Emoji id
        emoji_id: Snowflake,
        /// Owning guild
        guild_id: Snowflake,
    },
}

/// Where a user lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserHome {
    /// The registry's bot-user singleton.
    BotUser,
    /// Weak user index; strong holders are members, authors and recipients.
    Shared,
}

/// Route a channel by kind alone: direct-like kinds go to the DM index,
/// everything else to its guild.
///
/// # Errors
///
/// A guild kind without a guild cannot be placed.
#[track_caller]
pub fn channel_home(
    kind: ChannelType,
    channel_id: Snowflake,
    guild_id: Option<Snowflake>,
) -> Result<ChannelHome, PayloadError> {
    if kind.is_direct() {
        return Ok(ChannelHome::DirectIndex);
    }
    guild_id.map(ChannelHome::Guild).ok_or_else(|| {
        PayloadError::new(PayloadErrorKind::MissingField {
            entity: "channel",
            id: channel_id,
            field: "guild_id",
        })
    })
}

/// Route an emoji: only custom emoji parsed on behalf of a guild are owned.
pub fn emoji_home(emoji_id: Option<Snowflake>, guild_id: Option<Snowflake>) -> EmojiHome {
    match (emoji_id, guild_id) {
        (Some(emoji_id), Some(guild_id)) => EmojiHome::Guild { emoji_id, guild_id },
        _ => EmojiHome::Transient,
    }
}

/// Route a user: the authenticated account is recognised by its id or by
/// fields only it carries.
pub fn user_home(payload: &UserPayload, bot_user_id: Option<Snowflake>) -> UserHome {
    if bot_user_id == Some(*payload.id()) || payload.is_authenticated_account() {
        UserHome::BotUser
    } else {
        UserHome::Shared
    }
}
