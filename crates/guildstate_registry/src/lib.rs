//! Entity registry for the guildstate cache.
//!
//! [`StateRegistry`] mirrors a chat service's object graph from the
//! snapshots an ingestion layer hands it. Guilds own their channels,
//! roles, members and custom emoji; messages and direct channels live in
//! bounded LRU caches; users, guild channels and emoji are additionally
//! reachable through flat non-owning indices that the registry keeps in
//! lockstep with their owners.
//!
//! Each entity kind gets the same family of operations:
//! - `parse_*` creates the entity or updates it in place, returning the
//!   live handle.
//! - `update_*` returns a [`Diff`] of the prior snapshot and the live
//!   handle, or `None` when the entity is not cached.
//! - `get_*` returns `None` when the entity is not cached.
//! - `delete_*` removes the entity from every collection and is a no-op
//!   the second time.
//!
//! # Example
//!
//! ```
//! use guildstate_models::{GuildPayload, decode};
//! use guildstate_registry::{RegistryConfig, StateRegistry};
//! use serde_json::json;
//!
//! let mut registry = StateRegistry::new(RegistryConfig::default()).unwrap();
//! let guild: GuildPayload = decode(json!({
//!     "id": "10",
//!     "name": "guild",
//!     "roles": [{"id": "20", "name": "mod"}],
//!     "channels": [{"id": "30", "type": 0, "name": "general"}],
//!     "members": [{"user": {"id": "40", "username": "nyx"}, "roles": ["20"]}],
//! }))
//! .unwrap();
//! registry.parse_guild(&guild).unwrap();
//!
//! registry.delete_role(10, 20);
//! let member = registry.get_member_by_id(40, 10).unwrap();
//! assert!(member.read().roles().is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod channels;
mod config;
mod diff;
mod emojis;
mod guilds;
mod members;
mod messages;
mod ownership;
mod reactions;
mod registry;
mod roles;
mod shared;
mod users;

pub use config::{RegistryConfig, RegistryConfigBuilder};
pub use diff::{Diff, EmojiSetDiff, PresenceDiff};
pub use ownership::{ChannelHome, EmojiHome, UserHome, channel_home, emoji_home, user_home};
pub use registry::StateRegistry;
pub use shared::SharedRegistry;
