//! Tests for the message cache and reaction counting.

mod test_utils;

use guildstate_models::{Emoji, MessagePayload, ReactionPayload, decode};
use guildstate_registry::StateRegistry;
use serde_json::json;
use std::sync::Arc;
use test_utils::{TEXT_CHANNEL, guild_payload, message_payload, seeded_registry, unicode};

fn small_cache() -> StateRegistry {
    let mut registry = StateRegistry::with_capacities(2, 10).unwrap();
    registry.parse_guild(&guild_payload()).unwrap();
    registry
}

#[test]
fn test_message_cache_evicts_least_recently_used() {
    let mut registry = small_cache();
    registry.parse_message(&message_payload(1, TEXT_CHANNEL)).unwrap();
    registry.parse_message(&message_payload(2, TEXT_CHANNEL)).unwrap();

    assert!(registry.get_message_by_id(1).is_some());
    registry.parse_message(&message_payload(3, TEXT_CHANNEL)).unwrap();

    assert_eq!(registry.message_cache_len(), 2);
    assert!(registry.peek_message(2).is_none());
    assert!(registry.peek_message(1).is_some());
    assert!(registry.peek_message(3).is_some());
    assert_eq!(registry.cached_message_ids(), vec![3, 1]);
}

#[test]
fn test_reparse_refreshes_recency() {
    let mut registry = small_cache();
    let first = registry.parse_message(&message_payload(1, TEXT_CHANNEL)).unwrap();
    registry.parse_message(&message_payload(2, TEXT_CHANNEL)).unwrap();
    let again = registry.parse_message(&message_payload(1, TEXT_CHANNEL)).unwrap();
    registry.parse_message(&message_payload(3, TEXT_CHANNEL)).unwrap();

    assert!(Arc::ptr_eq(&first, &again));
    assert!(registry.peek_message(1).is_some());
    assert!(registry.peek_message(2).is_none());
}

#[test]
fn test_parse_message_tracks_channel_and_author() {
    let mut registry = seeded_registry();
    let message = registry.parse_message(&message_payload(7, TEXT_CHANNEL)).unwrap();

    let channel = registry.get_channel_by_id(TEXT_CHANNEL).unwrap();
    assert_eq!(*channel.read().last_message_id(), Some(7));

    let author = message.read().author().clone().unwrap();
    let member = registry.get_member_by_id(1000, 1).unwrap();
    assert!(Arc::ptr_eq(&author, member.read().user()));
    assert_eq!(message.read().content(), "message 7");
}

#[test]
fn test_message_for_unknown_channel_is_dropped() {
    let mut registry = seeded_registry();
    assert!(registry.parse_message(&message_payload(7, 999)).is_none());
    assert_eq!(registry.message_cache_len(), 0);
}

#[test]
fn test_update_and_delete_message() {
    let mut registry = seeded_registry();
    registry.parse_message(&message_payload(7, TEXT_CHANNEL)).unwrap();

    let edit: MessagePayload = decode(json!({
        "id": "7",
        "channel_id": "100",
        "content": "edited",
        "edited_timestamp": "2021-01-01T00:00:00Z"
    }))
    .unwrap();
    let diff = registry.update_message(&edit).unwrap();
    assert_eq!(diff.old().content(), "message 7");
    assert_eq!(diff.new().read().content(), "edited");
    assert!(diff.new().read().edited_timestamp().is_some());
    assert!(diff.new().read().author().is_some());
    drop(diff);

    assert!(registry.delete_message(7));
    assert!(!registry.delete_message(7));
    assert!(registry.update_message(&edit).is_none());
}

#[test]
fn test_reaction_counting() {
    let mut registry = seeded_registry();
    let message = registry.parse_message(&message_payload(7, TEXT_CHANNEL)).unwrap();
    let thumbs = unicode("👍");

    let first = registry.increment_reaction_count(&message, &thumbs);
    assert_eq!(*first.read().count(), 1);
    let second = registry.increment_reaction_count(&message, &thumbs);
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first.read().count(), 2);
    assert_eq!(message.read().reactions().len(), 1);

    registry.decrement_reaction_count(&message, &thumbs).unwrap();
    assert_eq!(*first.read().count(), 1);
    assert_eq!(message.read().reactions().len(), 1);

    registry.decrement_reaction_count(&message, &thumbs).unwrap();
    assert_eq!(*first.read().count(), 0);
    assert!(message.read().reactions().is_empty());

    assert!(registry.decrement_reaction_count(&message, &thumbs).is_none());
}

#[test]
fn test_reactions_match_custom_emoji_by_id() {
    let mut registry = seeded_registry();
    let message = registry.parse_message(&message_payload(7, TEXT_CHANNEL)).unwrap();
    let guild_emoji = Emoji::Guild(registry.get_emoji_by_id(500).unwrap());
    let bare = Emoji::Custom {
        id: 500,
        name: None,
        animated: false,
    };

    registry.increment_reaction_count(&message, &guild_emoji);
    let reaction = registry.increment_reaction_count(&message, &bare);
    assert_eq!(*reaction.read().count(), 2);
    assert_eq!(message.read().reactions().len(), 1);
}

#[test]
fn test_delete_reaction_zeroes_held_handle() {
    let mut registry = seeded_registry();
    let message = registry.parse_message(&message_payload(7, TEXT_CHANNEL)).unwrap();
    let fire = unicode("🔥");
    let held = registry.increment_reaction_count(&message, &fire);
    registry.increment_reaction_count(&message, &fire);
    registry.increment_reaction_count(&message, &unicode("👍"));

    let removed = registry.delete_reaction(&message, &fire).unwrap();
    assert!(Arc::ptr_eq(&held, &removed));
    assert!(held.read().is_empty());
    assert_eq!(message.read().reactions().len(), 1);
    assert!(registry.delete_reaction(&message, &fire).is_none());
}

#[test]
fn test_delete_all_reactions() {
    let mut registry = seeded_registry();
    let message = registry.parse_message(&message_payload(7, TEXT_CHANNEL)).unwrap();
    let a = registry.increment_reaction_count(&message, &unicode("a"));
    let b = registry.increment_reaction_count(&message, &unicode("b"));

    let removed = registry.delete_all_reactions(&message);
    assert_eq!(removed.len(), 2);
    assert_eq!(*a.read().count(), 0);
    assert_eq!(*b.read().count(), 0);
    assert!(message.read().reactions().is_empty());
    assert!(registry.delete_all_reactions(&message).is_empty());
}

#[test]
fn test_parse_reaction_sets_absolute_count() {
    let mut registry = seeded_registry();
    let message = registry.parse_message(&message_payload(7, TEXT_CHANNEL)).unwrap();

    let snapshot = |count: u32| -> ReactionPayload {
        decode(json!({"message_id": "7", "count": count, "emoji": {"name": "🔥"}})).unwrap()
    };
    let first = registry.parse_reaction(&snapshot(5)).unwrap();
    assert_eq!(*first.read().count(), 5);
    let second = registry.parse_reaction(&snapshot(3)).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first.read().count(), 3);
    assert_eq!(message.read().reactions().len(), 1);

    let uncached: ReactionPayload =
        decode(json!({"message_id": "8", "emoji": {"name": "🔥"}})).unwrap();
    assert!(registry.parse_reaction(&uncached).is_none());
}

#[test]
fn test_embedded_reactions_are_parsed() {
    let mut registry = seeded_registry();
    let payload: MessagePayload = decode(json!({
        "id": "7",
        "channel_id": "100",
        "content": "hi",
        "reactions": [
            {"count": 2, "me": true, "emoji": {"name": "👍"}},
            {"count": 1, "emoji": {"id": "500", "name": "blob"}}
        ]
    }))
    .unwrap();
    let message = registry.parse_message(&payload).unwrap();

    let message = message.read();
    assert_eq!(message.reactions().len(), 2);
    let thumbs = message.find_reaction(&unicode("👍")).unwrap();
    assert_eq!(*thumbs.read().count(), 2);
    let blob = message.reactions()[1].read();
    assert!(blob.emoji().is_guild_owned());
}
