//! guildstate - in-memory mirror of a chat service's guild graph
//!
//! The cache ingests full and partial entity snapshots (guilds, channels,
//! members, roles, emoji, messages, users, reactions) and keeps them in a
//! consistent, memory-bounded graph. Every update hands back the prior
//! snapshot next to the live entity so callers can derive change events.
//!
//! # Quick Start
//!
//! ```
//! use guildstate::{GuildPayload, MessagePayload, RegistryConfig, StateRegistry, decode};
//! use serde_json::json;
//!
//! let mut registry = StateRegistry::new(RegistryConfig::default())?;
//! let guild: GuildPayload = decode(json!({
//!     "id": "1",
//!     "name": "guild",
//!     "channels": [{"id": "2", "type": 0, "name": "general"}],
//! }))?;
//! registry.parse_guild(&guild)?;
//!
//! let message: MessagePayload = decode(json!({
//!     "id": "3",
//!     "channel_id": "2",
//!     "content": "hello",
//!     "author": {"id": "4", "username": "ada"},
//! }))?;
//! let message = registry.parse_message(&message).expect("channel is cached");
//! assert_eq!(message.read().content(), "hello");
//! # Ok::<(), guildstate::GuildStateError>(())
//! ```
//!
//! # Architecture
//!
//! - `guildstate_error` - Error types
//! - `guildstate_cache` - Bounded LRU and weak lookup indices
//! - `guildstate_models` - Entities and snapshot payloads
//! - `guildstate_registry` - The registry, its config and the upsert,
//!   diff and delete operations
//!
//! This crate re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use guildstate_cache::*;
pub use guildstate_error::*;
pub use guildstate_models::*;
pub use guildstate_registry::*;

mod observability;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
