//! Emoji, both unicode and custom.

use crate::{EmojiPayload, Handle, Snowflake};

/// A custom emoji owned by a guild.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct GuildEmoji {
    id: Snowflake,
    guild_id: Snowflake,
    name: String,
    roles: Vec<Snowflake>,
    animated: bool,
    require_colons: bool,
    managed: bool,
    available: bool,
}

impl GuildEmoji {
    /// Build a guild emoji from its first snapshot.
    pub fn from_payload(payload: &EmojiPayload, id: Snowflake, guild_id: Snowflake) -> Self {
        let mut emoji = Self {
            id,
            guild_id,
            name: String::new(),
            roles: Vec::new(),
            animated: false,
            require_colons: true,
            managed: false,
            available: true,
        };
        emoji.apply(payload);
        emoji
    }

    /// Fold the fields present in `payload` into this emoji.
    pub fn apply(&mut self, payload: &EmojiPayload) {
        if let Some(name) = payload.name() {
            self.name = name.clone();
        }
        self.roles = payload.roles().clone();
        if let Some(animated) = payload.animated() {
            self.animated = *animated;
        }
        if let Some(require_colons) = payload.require_colons() {
            self.require_colons = *require_colons;
        }
        if let Some(managed) = payload.managed() {
            self.managed = *managed;
        }
        if let Some(available) = payload.available() {
            self.available = *available;
        }
    }
}

/// Identity of an emoji: unicode emoji by their text, custom ones by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EmojiKey {
    /// Unicode emoji
    #[display("{_0}")]
    Unicode(String),
    /// Custom emoji, guild-owned or not
    #[display("custom:{_0}")]
    Custom(Snowflake),
}

/// Any emoji the registry can hand out.
///
/// Equality compares [`EmojiKey`]s, so a custom emoji seen on a reaction
/// equals the guild emoji with the same id.
#[derive(Debug, Clone)]
pub enum Emoji {
    /// Plain unicode emoji; never indexed.
    Unicode {
        /// The emoji text
        name: String,
    },
    /// Custom emoji from a guild this client does not cache; never indexed.
    Custom {
        /// Emoji id
        id: Snowflake,
        /// Emoji name, if known
        name: Option<String>,
        /// Animated flag
        animated: bool,
    },
    /// Custom emoji owned by a cached guild.
    Guild(Handle<GuildEmoji>),
}

impl Emoji {
    /// Build a transient emoji that no collection owns.
    pub fn from_payload(payload: &EmojiPayload) -> Self {
        match payload.id() {
            Some(id) => Emoji::Custom {
                id: *id,
                name: payload.name().clone(),
                animated: payload.animated().unwrap_or(false),
            },
            None => Emoji::Unicode {
                name: payload.name().clone().unwrap_or_default(),
            },
        }
    }

    /// Identity used to match reactions.
    pub fn key(&self) -> EmojiKey {
        match self {
            Emoji::Unicode { name } => EmojiKey::Unicode(name.clone()),
            Emoji::Custom { id, .. } => EmojiKey::Custom(*id),
            Emoji::Guild(emoji) => EmojiKey::Custom(*emoji.read().id()),
        }
    }

    /// Custom emoji id, if any.
    pub fn id(&self) -> Option<Snowflake> {
        match self.key() {
            EmojiKey::Custom(id) => Some(id),
            EmojiKey::Unicode(_) => None,
        }
    }

    /// Whether the emoji is owned by a cached guild.
    pub fn is_guild_owned(&self) -> bool {
        matches!(self, Emoji::Guild(_))
    }
}

impl PartialEq for Emoji {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Emoji {}
