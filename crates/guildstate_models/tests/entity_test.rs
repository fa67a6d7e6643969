//! Tests for entity construction from snapshots.

use guildstate_models::{
    BotUser, Emoji, EmojiKey, EmojiPayload, GuildEmoji, Reaction, Role, RolePayload, User,
    UserPayload, decode, handle,
};
use serde_json::json;

#[test]
fn test_snowflakes_accept_strings_and_integers() {
    let from_string: UserPayload = decode(json!({"id": "42"})).unwrap();
    let from_int: UserPayload = decode(json!({"id": 42})).unwrap();
    assert_eq!(from_string, from_int);

    let bad = decode::<UserPayload>(json!({"id": "not-a-number"}));
    assert!(bad.is_err());
}

#[test]
fn test_authenticated_account_fields_are_detected() {
    let plain: UserPayload = decode(json!({"id": 1, "username": "a"})).unwrap();
    let account: UserPayload = decode(json!({"id": 1, "verified": true})).unwrap();
    assert!(!plain.is_authenticated_account());
    assert!(account.is_authenticated_account());
}

#[test]
fn test_user_apply_only_overwrites_present_fields() {
    let first: UserPayload =
        decode(json!({"id": 1, "username": "nelly", "avatar": "abc", "bot": true})).unwrap();
    let delta: UserPayload = decode(json!({"id": 1, "username": "nell"})).unwrap();

    let mut user = User::from_payload(&first);
    user.apply(&delta);
    assert_eq!(user.username(), "nell");
    assert_eq!(user.avatar().as_deref(), Some("abc"));
    assert!(*user.bot());
}

#[test]
fn test_bot_user_updates_shared_profile() {
    let first: UserPayload =
        decode(json!({"id": 7, "username": "me", "mfa_enabled": false})).unwrap();
    let second: UserPayload =
        decode(json!({"id": 7, "username": "me2", "mfa_enabled": true, "locale": "en-GB"}))
            .unwrap();

    let mut me = BotUser::from_payload(&first);
    let profile = me.user().clone();
    me.apply(&second);

    assert_eq!(me.id(), 7);
    assert!(*me.mfa_enabled());
    assert_eq!(me.locale().as_deref(), Some("en-GB"));
    assert_eq!(profile.read().username(), "me2");
}

#[test]
fn test_role_permissions_from_string_bits() {
    let payload: RolePayload =
        decode(json!({"id": 3, "name": "mods", "permissions": "8", "position": 2})).unwrap();
    let role = Role::from_payload(&payload, 100);
    assert_eq!(*role.guild_id(), 100);
    assert!(role.permissions().contains(guildstate_models::Permissions::ADMINISTRATOR));
    assert_eq!(*role.position(), 2);
}

#[test]
fn test_emoji_identity() {
    let unicode: EmojiPayload = decode(json!({"name": "👍"})).unwrap();
    let custom: EmojiPayload = decode(json!({"id": "55", "name": "blob"})).unwrap();

    let thumbs = Emoji::from_payload(&unicode);
    let blob = Emoji::from_payload(&custom);
    assert_eq!(thumbs.key(), EmojiKey::Unicode("👍".to_string()));
    assert_eq!(blob.key(), EmojiKey::Custom(55));
    assert_ne!(thumbs, blob);

    let owned = Emoji::Guild(handle(GuildEmoji::from_payload(&custom, 55, 9)));
    assert_eq!(owned, blob);
    assert!(owned.is_guild_owned());
    assert_eq!(owned.id(), Some(55));
}

#[test]
fn test_reaction_count_never_goes_negative() {
    let emoji = Emoji::Unicode {
        name: "🔥".to_string(),
    };
    let mut reaction = Reaction::new(1, emoji, 10);
    assert_eq!(reaction.decrement(), 0);
    assert_eq!(reaction.decrement(), 0);
    assert!(reaction.is_empty());
    assert_eq!(reaction.increment(), 1);
}
