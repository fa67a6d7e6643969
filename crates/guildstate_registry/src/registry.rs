//! The entity registry and its read-side queries.

use crate::RegistryConfig;
use guildstate_cache::{BoundedIndex, WeakIndex};
use guildstate_error::{GuildStateResult, PayloadError, PayloadErrorKind};
use guildstate_models::{
    BotUser, Channel, Guild, GuildEmoji, Handle, Member, Message, Role, Snowflake, User,
};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory mirror of the remote object graph.
///
/// Ownership:
/// - `guilds` strongly owns every guild, and through them every guild
///   channel, role, member and custom emoji.
/// - `dm_channels` and `messages` own their entries but hold at most a
///   configured number of them.
/// - `guild_channels`, `emojis` and `users` are flat lookups that never
///   keep an entity alive on their own.
/// - `me` owns the authenticated account once it has been seen.
///
/// All mutation goes through `&mut self`, so one writer applies snapshots
/// in order and no reader can observe a cross-collection update halfway.
/// Lookups on bounded kinds take `&mut self` as well, because reading
/// counts as a use for LRU purposes.
///
/// # Example
///
/// ```
/// use guildstate_models::{GuildPayload, decode};
/// use guildstate_registry::{RegistryConfig, StateRegistry};
/// use serde_json::json;
///
/// let mut registry = StateRegistry::new(RegistryConfig::default()).unwrap();
/// let payload: GuildPayload = decode(json!({"id": "1", "name": "lobby"})).unwrap();
/// let guild = registry.parse_guild(&payload).unwrap();
///
/// assert_eq!(guild.read().name(), "lobby");
/// assert!(registry.get_guild_by_id(1).is_some());
/// ```
pub struct StateRegistry {
    config: RegistryConfig,
    pub(crate) guilds: HashMap<Snowflake, Handle<Guild>>,
    pub(crate) dm_channels: BoundedIndex<Snowflake, Handle<Channel>>,
    pub(crate) guild_channels: WeakIndex<Snowflake, RwLock<Channel>>,
    pub(crate) emojis: WeakIndex<Snowflake, RwLock<GuildEmoji>>,
    pub(crate) users: WeakIndex<Snowflake, RwLock<User>>,
    pub(crate) messages: BoundedIndex<Snowflake, Handle<Message>>,
    pub(crate) me: Option<Handle<BotUser>>,
}

impl StateRegistry {
    /// Create an empty registry.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if either bounded cache is configured with
    /// a capacity of zero.
    #[tracing::instrument(fields(
        max_messages = config.max_messages(),
        max_dm_channels = config.max_dm_channels()
    ))]
    pub fn new(config: RegistryConfig) -> GuildStateResult<Self> {
        config.validate()?;
        let dm_channels = BoundedIndex::new("dm_channels", *config.max_dm_channels())?;
        let messages = BoundedIndex::new("messages", *config.max_messages())?;
        tracing::debug!("Creating new StateRegistry");
        Ok(Self {
            config,
            guilds: HashMap::new(),
            dm_channels,
            guild_channels: WeakIndex::new("guild_channels"),
            emojis: WeakIndex::new("emojis"),
            users: WeakIndex::new("users"),
            messages,
            me: None,
        })
    }

    /// Create a registry with explicit capacities.
    ///
    /// # Errors
    ///
    /// Returns a capacity error if either capacity is zero.
    pub fn with_capacities(max_messages: usize, max_dm_channels: usize) -> GuildStateResult<Self> {
        Self::new(
            RegistryConfig::default()
                .with_max_messages(max_messages)
                .with_max_dm_channels(max_dm_channels),
        )
    }

    /// Configuration the registry was built with.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The authenticated account, once a snapshot of it has been parsed.
    pub fn me(&self) -> Option<Handle<BotUser>> {
        self.me.clone()
    }

    pub(crate) fn bot_user_id(&self) -> Option<Snowflake> {
        self.me.as_ref().map(|me| me.read().id())
    }

    /// Guild by id.
    pub fn get_guild_by_id(&self, guild_id: Snowflake) -> Option<Handle<Guild>> {
        self.guilds.get(&guild_id).cloned()
    }

    /// Ids of every cached guild.
    pub fn guild_ids(&self) -> Vec<Snowflake> {
        self.guilds.keys().copied().collect()
    }

    /// Channel by id, guild or direct. A direct hit counts as a use.
    pub fn get_channel_by_id(&mut self, channel_id: Snowflake) -> Option<Handle<Channel>> {
        self.guild_channels
            .get(&channel_id)
            .or_else(|| self.dm_channels.get(&channel_id).cloned())
    }

    /// Direct channel by id, without touching DM recency.
    pub fn peek_dm_channel(&self, channel_id: Snowflake) -> Option<Handle<Channel>> {
        self.dm_channels.peek(&channel_id).cloned()
    }

    /// Guild channel by id, through the flat index only.
    pub fn get_guild_channel_by_id(&self, channel_id: Snowflake) -> Option<Handle<Channel>> {
        self.guild_channels.get(&channel_id)
    }

    /// Member of `guild_id` by user id.
    pub fn get_member_by_id(
        &self,
        user_id: Snowflake,
        guild_id: Snowflake,
    ) -> Option<Handle<Member>> {
        let guild = self.guilds.get(&guild_id)?;
        guild.read().members().get(&user_id).cloned()
    }

    /// Role of `guild_id` by id.
    pub fn get_role_by_id(&self, guild_id: Snowflake, role_id: Snowflake) -> Option<Handle<Role>> {
        let guild = self.guilds.get(&guild_id)?;
        guild.read().roles().get(&role_id).cloned()
    }

    /// Custom emoji by id, from any cached guild.
    pub fn get_emoji_by_id(&self, emoji_id: Snowflake) -> Option<Handle<GuildEmoji>> {
        self.emojis.get(&emoji_id)
    }

    /// User by id. The bot's own profile is checked first.
    pub fn get_user_by_id(&self, user_id: Snowflake) -> Option<Handle<User>> {
        if let Some(me) = &self.me {
            let me = me.read();
            if me.id() == user_id {
                return Some(me.user().clone());
            }
        }
        self.users.get(&user_id)
    }

    /// Cached message by id. A hit counts as a use.
    pub fn get_message_by_id(&mut self, message_id: Snowflake) -> Option<Handle<Message>> {
        self.messages.get(&message_id).cloned()
    }

    /// Cached message by id, without touching recency.
    pub fn peek_message(&self, message_id: Snowflake) -> Option<Handle<Message>> {
        self.messages.peek(&message_id).cloned()
    }

    /// Number of cached messages.
    pub fn message_cache_len(&self) -> usize {
        self.messages.len()
    }

    /// Cached message ids, most recently used first.
    pub fn cached_message_ids(&self) -> Vec<Snowflake> {
        self.messages.keys().copied().collect()
    }

    /// Number of cached direct channels.
    pub fn dm_channel_cache_len(&self) -> usize {
        self.dm_channels.len()
    }

    /// Drop index entries whose entities are gone. Returns how many.
    pub fn purge_released(&mut self) -> usize {
        self.users.purge() + self.guild_channels.purge() + self.emojis.purge()
    }

    #[track_caller]
    pub(crate) fn require_guild(
        &self,
        entity: &'static str,
        id: Snowflake,
        guild_id: Snowflake,
    ) -> Result<Handle<Guild>, PayloadError> {
        self.guilds.get(&guild_id).cloned().ok_or_else(|| {
            PayloadError::new(PayloadErrorKind::MissingGuild {
                entity,
                id,
                guild_id,
            })
        })
    }
}

impl std::fmt::Debug for StateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateRegistry")
            .field("config", &self.config)
            .field("guilds", &self.guilds.len())
            .field("dm_channels", &self.dm_channels)
            .field("messages", &self.messages)
            .field("guild_channels", &self.guild_channels)
            .field("emojis", &self.emojis)
            .field("users", &self.users)
            .field("me", &self.bot_user_id())
            .finish()
    }
}
