//! Tests for users, the bot-user singleton and emoji.

mod test_utils;

use guildstate_models::{Emoji, EmojiPayload, UserPayload, decode};
use serde_json::json;
use std::sync::Arc;
use test_utils::{
    GUILD_EMOJI, GUILD_ID, TEXT_CHANNEL, message_payload, registry, seeded_registry,
};

fn user(value: serde_json::Value) -> UserPayload {
    decode(value).unwrap()
}

#[test]
fn test_bot_user_is_a_singleton() {
    let mut registry = registry();
    assert!(registry.me().is_none());

    let me =
        registry.parse_bot_user(&user(json!({"id": "1", "username": "bot", "verified": true})));
    let again = registry.parse_bot_user(&user(json!({"id": "1", "locale": "en-US"})));

    assert!(Arc::ptr_eq(&me, &again));
    assert!(Arc::ptr_eq(&me, &registry.me().unwrap()));
    let me = me.read();
    assert!(*me.verified());
    assert_eq!(me.locale().as_deref(), Some("en-US"));
    assert_eq!(me.user().read().username(), "bot");
}

#[test]
fn test_account_fields_route_to_bot_user() {
    let mut registry = registry();
    let profile = registry.parse_user(&user(
        json!({"id": "1", "username": "bot", "mfa_enabled": false}),
    ));
    let me = registry.me().unwrap();
    assert!(Arc::ptr_eq(&profile, me.read().user()));

    let by_id = registry.parse_user(&user(json!({"id": "1", "username": "renamed"})));
    assert!(Arc::ptr_eq(&profile, &by_id));
    assert_eq!(profile.read().username(), "renamed");

    let lookup = registry.get_user_by_id(1).unwrap();
    assert!(Arc::ptr_eq(&profile, &lookup));
}

#[test]
fn test_user_index_does_not_extend_lifetime() {
    let mut registry = registry();
    let held = registry.parse_user(&user(json!({"id": "5", "username": "eve"})));
    assert!(registry.get_user_by_id(5).is_some());

    drop(held);
    assert!(registry.get_user_by_id(5).is_none());
    assert_eq!(registry.purge_released(), 1);
}

#[test]
fn test_user_shared_between_holders() {
    let mut registry = seeded_registry();
    let message = registry.parse_message(&message_payload(7, TEXT_CHANNEL)).unwrap();
    registry.delete_member(GUILD_ID, 1000);

    let author = registry.get_user_by_id(1000).unwrap();
    assert!(Arc::ptr_eq(&author, message.read().author().as_ref().unwrap()));

    drop(author);
    drop(message);
    assert!(registry.delete_message(7));
    assert!(registry.get_user_by_id(1000).is_none());
}

#[test]
fn test_update_and_delete_user() {
    let mut registry = seeded_registry();
    let diff = registry
        .update_user(&user(json!({"id": "1001", "avatar": "hash"})))
        .unwrap();
    assert!(diff.old().avatar().is_none());
    assert_eq!(diff.new().read().avatar().as_deref(), Some("hash"));
    assert_eq!(diff.new().read().username(), "bea");

    assert!(registry.update_user(&user(json!({"id": "9"}))).is_none());

    assert!(registry.delete_user(1001));
    assert!(!registry.delete_user(1001));
    assert!(registry.get_user_by_id(1001).is_none());
    let member = registry.get_member_by_id(1001, GUILD_ID).unwrap();
    assert_eq!(member.read().user().read().username(), "bea");
}

#[test]
fn test_emoji_routing() {
    let mut registry = seeded_registry();

    let unicode: EmojiPayload = decode(json!({"name": "🔥"})).unwrap();
    assert!(matches!(
        registry.parse_emoji(&unicode, None).unwrap(),
        Emoji::Unicode { .. }
    ));

    let foreign: EmojiPayload = decode(json!({"id": "600", "name": "far"})).unwrap();
    assert!(matches!(
        registry.parse_emoji(&foreign, None).unwrap(),
        Emoji::Custom { id: 600, .. }
    ));
    assert!(registry.get_emoji_by_id(600).is_none());

    let owned = registry.parse_emoji(&foreign, Some(GUILD_ID)).unwrap();
    assert!(owned.is_guild_owned());
    let indexed = registry.get_emoji_by_id(600).unwrap();
    let guild = registry.get_guild_by_id(GUILD_ID).unwrap();
    assert!(Arc::ptr_eq(&indexed, guild.read().emojis().get(&600).unwrap()));
}

#[test]
fn test_known_emoji_updates_in_place() {
    let mut registry = seeded_registry();
    let before = registry.get_emoji_by_id(GUILD_EMOJI).unwrap();
    let payload: EmojiPayload = decode(json!({"id": "500", "name": "blobby"})).unwrap();

    match registry.parse_emoji(&payload, None).unwrap() {
        Emoji::Guild(after) => assert!(Arc::ptr_eq(&before, &after)),
        other => panic!("unexpected emoji: {other:?}"),
    }
    assert_eq!(before.read().name(), "blobby");
}

#[test]
fn test_update_guild_emojis_replaces_set() {
    let mut registry = seeded_registry();
    let payloads: Vec<EmojiPayload> = vec![
        decode(json!({"id": "501", "name": "wave"})).unwrap(),
        decode(json!({"id": "502", "name": "cat", "animated": true})).unwrap(),
    ];
    let diff = registry
        .update_guild_emojis(GUILD_ID, &payloads)
        .unwrap()
        .unwrap();

    assert_eq!(diff.old().len(), 1);
    assert_eq!(diff.new().len(), 2);
    assert_eq!(diff.removed_ids(), vec![GUILD_EMOJI]);
    assert!(registry.get_emoji_by_id(GUILD_EMOJI).is_none());
    assert!(registry.get_emoji_by_id(502).is_some());
    let guild = registry.get_guild_by_id(GUILD_ID).unwrap();
    assert_eq!(guild.read().emojis().len(), 2);

    assert!(registry.update_guild_emojis(99, &payloads).unwrap().is_none());
}

#[test]
fn test_delete_emoji_is_idempotent() {
    let mut registry = seeded_registry();
    assert!(registry.delete_emoji(GUILD_EMOJI).is_some());
    assert!(registry.delete_emoji(GUILD_EMOJI).is_none());

    let guild = registry.get_guild_by_id(GUILD_ID).unwrap();
    assert!(guild.read().emojis().is_empty());
}
