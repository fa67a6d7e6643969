//! Tests for members, roles and the role cascade.

mod test_utils;

use guildstate_models::{MemberPayload, Permissions, PresencePayload, RolePayload, Status, decode};
use serde_json::json;
use std::sync::Arc;
use test_utils::{GUILD_ID, MEMBER_ROLE, MOD_ROLE, registry, seeded_registry};

#[test]
fn test_delete_role_cascades_to_members() {
    let mut registry = seeded_registry();
    let m1 = registry.get_member_by_id(1000, GUILD_ID).unwrap();
    let m2 = registry.get_member_by_id(1001, GUILD_ID).unwrap();
    let m3 = registry.get_member_by_id(1002, GUILD_ID).unwrap();
    assert!(m1.read().has_role(MOD_ROLE));
    assert!(m2.read().has_role(MOD_ROLE));
    assert!(!m3.read().has_role(MOD_ROLE));

    let removed = registry.delete_role(GUILD_ID, MOD_ROLE).unwrap();
    assert_eq!(removed.read().name(), "mod");

    assert!(m1.read().role_ids().is_empty());
    assert_eq!(m2.read().role_ids(), vec![MEMBER_ROLE]);
    assert_eq!(m3.read().role_ids(), vec![MEMBER_ROLE]);
    assert!(registry.get_role_by_id(GUILD_ID, MOD_ROLE).is_none());

    assert!(registry.delete_role(GUILD_ID, MOD_ROLE).is_none());
    assert_eq!(m2.read().role_ids(), vec![MEMBER_ROLE]);
    assert!(registry.delete_role(99, MOD_ROLE).is_none());
}

#[test]
fn test_parse_role_updates_in_place() {
    let mut registry = seeded_registry();
    let role = registry.get_role_by_id(GUILD_ID, MOD_ROLE).unwrap();
    assert_eq!(*role.read().permissions(), Permissions::ADMINISTRATOR);

    let payload: RolePayload = decode(json!({"id": "10", "color": 255})).unwrap();
    let again = registry.parse_role(&payload, GUILD_ID).unwrap();
    assert!(Arc::ptr_eq(&role, &again));
    assert_eq!(*role.read().color(), 255);
    assert_eq!(role.read().name(), "mod");
}

#[test]
fn test_parse_role_requires_guild() {
    let mut registry = registry();
    let payload: RolePayload = decode(json!({"id": "10"})).unwrap();
    let err = registry.parse_role(&payload, GUILD_ID).unwrap_err();
    assert!(err.is_invalid_payload());
}

#[test]
fn test_update_role_returns_diff() {
    let mut registry = seeded_registry();
    let payload: RolePayload = decode(json!({"id": "11", "name": "regular"})).unwrap();
    let diff = registry.update_role(GUILD_ID, &payload).unwrap();
    assert_eq!(diff.old().name(), "member");
    assert_eq!(diff.new().read().name(), "regular");

    let unknown: RolePayload = decode(json!({"id": "12"})).unwrap();
    assert!(registry.update_role(GUILD_ID, &unknown).is_none());
}

#[test]
fn test_update_member_replaces_roles_and_nick_only() {
    let mut registry = seeded_registry();
    let (old, new) = registry
        .update_member(GUILD_ID, 1000, &[MEMBER_ROLE], Some("ada!".to_string()))
        .unwrap()
        .into_parts();

    assert_eq!(old.role_ids(), vec![MOD_ROLE]);
    assert!(old.nick().is_none());

    let member = new.read();
    assert_eq!(member.role_ids(), vec![MEMBER_ROLE]);
    assert_eq!(member.nick().as_deref(), Some("ada!"));
    assert_eq!(*member.presence().as_ref().unwrap().status(), Status::Online);
    assert_eq!(member.user().read().username(), "ada");
    drop(member);

    assert!(Arc::ptr_eq(
        &new,
        &registry.get_member_by_id(1000, GUILD_ID).unwrap()
    ));
    assert!(registry.update_member(GUILD_ID, 4242, &[], None).is_none());
}

#[test]
fn test_parse_member_skips_unknown_roles() {
    let mut registry = seeded_registry();
    let payload: MemberPayload = decode(json!({
        "user": {"id": "1003", "username": "dee"},
        "roles": ["10", "77"],
        "joined_at": "2021-01-01T00:00:00Z"
    }))
    .unwrap();
    let member = registry.parse_member(&payload, GUILD_ID).unwrap();

    assert_eq!(member.read().role_ids(), vec![MOD_ROLE]);
    assert!(member.read().joined_at().is_some());
    assert!(registry.get_user_by_id(1003).is_some());
}

#[test]
fn test_set_roles_for_member() {
    let mut registry = seeded_registry();
    assert!(registry.set_roles_for_member(GUILD_ID, 1002, &[MOD_ROLE, MEMBER_ROLE]));
    let member = registry.get_member_by_id(1002, GUILD_ID).unwrap();
    assert_eq!(member.read().role_ids(), vec![MOD_ROLE, MEMBER_ROLE]);
    assert_eq!(member.read().nick().as_deref(), Some("c"));

    assert!(!registry.set_roles_for_member(GUILD_ID, 4242, &[MOD_ROLE]));
}

#[test]
fn test_delete_member_releases_user() {
    let mut registry = seeded_registry();
    assert!(registry.get_user_by_id(1001).is_some());

    assert!(registry.delete_member(GUILD_ID, 1001));
    assert!(registry.get_member_by_id(1001, GUILD_ID).is_none());
    assert!(registry.get_user_by_id(1001).is_none());

    assert!(!registry.delete_member(GUILD_ID, 1001));
}

#[test]
fn test_update_member_presence_returns_both_states() {
    let mut registry = seeded_registry();
    let payload: PresencePayload = decode(json!({
        "user": {"id": "1000"},
        "status": "dnd",
        "activities": [{"name": "chess", "type": 0}]
    }))
    .unwrap();
    let diff = registry.update_member_presence(GUILD_ID, &payload).unwrap();

    assert_eq!(*diff.old().as_ref().unwrap().status(), Status::Online);
    assert_eq!(*diff.new().status(), Status::Dnd);
    assert_eq!(diff.new().activities()[0].name(), "chess");
    let member = diff.member().read();
    assert_eq!(member.presence().as_ref(), Some(diff.new()));
}

#[test]
fn test_parse_presence_uses_payload_guild() {
    let mut registry = seeded_registry();
    let payload: PresencePayload =
        decode(json!({"user": {"id": "1001"}, "guild_id": "1", "status": "idle"})).unwrap();
    let presence = registry.parse_presence(&payload, None).unwrap();
    assert_eq!(*presence.status(), Status::Idle);

    let stray: PresencePayload = decode(json!({"user": {"id": "1001"}})).unwrap();
    assert!(registry.parse_presence(&stray, None).is_none());
}
