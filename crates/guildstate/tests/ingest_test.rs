//! End-to-end snapshot stream through the facade.

use guildstate::{
    ChannelPayload, Emoji, GuildPayload, MemberPayload, MessagePayload, RegistryConfig,
    StateRegistry, decode,
};
use serde_json::json;
use std::sync::Arc;

#[test]
fn test_snapshot_stream() {
    let mut registry =
        StateRegistry::new(RegistryConfig::default().with_max_messages(2)).unwrap();

    let ready: GuildPayload = decode(json!({"id": "1", "unavailable": true})).unwrap();
    let guild = registry.parse_guild(&ready).unwrap();
    assert!(*guild.read().unavailable());

    let create: GuildPayload = decode(json!({
        "id": "1",
        "name": "guild",
        "roles": [{"id": "10", "name": "mod"}],
        "channels": [{"id": "100", "type": 0, "name": "general"}]
    }))
    .unwrap();
    let created = registry.parse_guild(&create).unwrap();
    assert!(Arc::ptr_eq(&guild, &created));
    assert!(!*guild.read().unavailable());

    let join: MemberPayload = decode(json!({
        "user": {"id": "1000", "username": "ada"},
        "roles": ["10"]
    }))
    .unwrap();
    registry.parse_member(&join, 1).unwrap();

    let dm: ChannelPayload = decode(json!({
        "id": "200",
        "type": 1,
        "recipients": [{"id": "1000", "username": "ada"}]
    }))
    .unwrap();
    registry.parse_channel(&dm, None).unwrap();

    for (id, channel) in [(1, "100"), (2, "200"), (3, "100")] {
        let message: MessagePayload = decode(json!({
            "id": id,
            "channel_id": channel,
            "content": "hi",
            "author": {"id": "1000"}
        }))
        .unwrap();
        registry.parse_message(&message).unwrap();
    }
    assert_eq!(registry.cached_message_ids(), vec![3, 2]);

    let latest = registry.get_message_by_id(3).unwrap();
    let wave = Emoji::Unicode {
        name: "👋".to_string(),
    };
    registry.increment_reaction_count(&latest, &wave);
    assert_eq!(latest.read().reactions().len(), 1);

    let diff = registry
        .update_member(1, 1000, &[], Some("ada".to_string()))
        .unwrap();
    assert_eq!(diff.old().role_ids(), vec![10]);
    assert!(diff.new().read().roles().is_empty());

    registry.delete_role(1, 10);
    registry.delete_guild(1);
    assert!(registry.get_channel_by_id(100).is_none());
    assert!(registry.get_channel_by_id(200).is_some());
    assert!(registry.get_user_by_id(1000).is_some());
}
