//! Fixtures shared by the registry tests.
//!
//! The seeded guild has id 1 and holds:
//! - roles 10 and 11
//! - text channel 100 and voice channel 101
//! - custom emoji 500
//! - members 1000 (role 10), 1001 (roles 10 and 11) and 1002 (role 11)

#![allow(dead_code)]

use guildstate_models::{ChannelPayload, Emoji, GuildPayload, MessagePayload, decode};
use guildstate_registry::StateRegistry;
use serde_json::{Value, json};

pub const GUILD_ID: u64 = 1;
pub const MOD_ROLE: u64 = 10;
pub const MEMBER_ROLE: u64 = 11;
pub const TEXT_CHANNEL: u64 = 100;
pub const VOICE_CHANNEL: u64 = 101;
pub const GUILD_EMOJI: u64 = 500;

pub fn guild_json() -> Value {
    json!({
        "id": "1",
        "name": "guild",
        "owner_id": "1000",
        "roles": [
            {"id": "10", "name": "mod", "permissions": "8", "position": 2},
            {"id": "11", "name": "member", "permissions": "1024", "position": 1}
        ],
        "channels": [
            {"id": "100", "type": 0, "name": "general", "topic": "hello"},
            {"id": "101", "type": 2, "name": "voice", "bitrate": 64000}
        ],
        "emojis": [
            {"id": "500", "name": "blob", "roles": []}
        ],
        "members": [
            {"user": {"id": "1000", "username": "ada"}, "roles": ["10"]},
            {"user": {"id": "1001", "username": "bea"}, "roles": ["10", "11"]},
            {"user": {"id": "1002", "username": "cy"}, "roles": ["11"], "nick": "c"}
        ],
        "presences": [
            {"user": {"id": "1000"}, "status": "online"}
        ]
    })
}

pub fn guild_payload() -> GuildPayload {
    decode(guild_json()).unwrap()
}

pub fn registry() -> StateRegistry {
    StateRegistry::with_capacities(10, 10).unwrap()
}

pub fn seeded_registry() -> StateRegistry {
    let mut registry = registry();
    registry.parse_guild(&guild_payload()).unwrap();
    registry
}

pub fn message_payload(id: u64, channel_id: u64) -> MessagePayload {
    decode(json!({
        "id": id,
        "channel_id": channel_id,
        "content": format!("message {id}"),
        "author": {"id": "1000", "username": "ada"}
    }))
    .unwrap()
}

pub fn dm_payload(id: u64, recipient_id: u64) -> ChannelPayload {
    decode(json!({
        "id": id,
        "type": 1,
        "recipients": [{"id": recipient_id, "username": "friend"}]
    }))
    .unwrap()
}

pub fn unicode(name: &str) -> Emoji {
    Emoji::Unicode {
        name: name.to_string(),
    }
}
