//! End-to-end moderation scenarios driven through the public engine API.

use studyroom_session::{EngineConfig, SessionEngine, SessionError, SessionEvent};
use studyroom_shared::types::{GroupId, IdentityKey};

fn engine() -> SessionEngine {
    let config = EngineConfig::default()
        .with_admin_secret("pw")
        .with_blocked_words(["shit"]);
    SessionEngine::new(config).expect("engine should build")
}

#[test]
fn flagged_message_cleared_then_author_banned() {
    let mut engine = engine();
    engine.set_identity("Alice").unwrap();

    let msg = engine.send_message("this is shit", None).unwrap();
    assert!(msg.flagged);
    assert!(engine.messages().iter().any(|m| m.id == msg.id));

    engine.authenticate_admin("pw").unwrap();
    assert!(engine.is_admin());

    assert_eq!(engine.clear_flagged().unwrap(), 1);
    assert!(engine.messages().iter().all(|m| m.id != msg.id));

    engine.ban_user("Alice").unwrap();
    assert_eq!(
        engine.send_message("hello", None),
        Err(SessionError::Banned(IdentityKey::from_name("Alice")))
    );
    assert_eq!(engine.message_count(), 0);
}

#[test]
fn wrong_password_then_ban_is_unauthorized() {
    let mut engine = engine();

    assert_eq!(
        engine.authenticate_admin("wrong"),
        Err(SessionError::InvalidCredentials)
    );
    assert_eq!(engine.ban_user("Alice"), Err(SessionError::Unauthorized));
    assert!(engine.banned().is_empty());
}

#[test]
fn ban_blocks_message_regardless_of_prior_state() {
    let mut engine = engine();
    engine.authenticate_admin("pw").unwrap();

    // Banned before ever joining.
    engine.ban_user("carol").unwrap();
    assert!(matches!(
        engine.set_identity("Carol"),
        Err(SessionError::Banned(_))
    ));

    // Banned after joining and posting.
    engine.set_identity("Dave").unwrap();
    engine.send_message("hi all", None).unwrap();
    engine.ban_user("DAVE").unwrap();
    assert!(matches!(
        engine.send_message("still here?", None),
        Err(SessionError::Banned(_))
    ));

    // Existing messages from a banned author are left alone.
    assert_eq!(engine.message_count(), 1);
}

#[test]
fn failed_operations_leave_state_untouched() {
    let mut engine = engine();
    engine.set_identity("Alice").unwrap();
    engine.send_message("hello", None).unwrap();
    engine.drain_events();

    let before = serde_json::to_value(engine.snapshot()).unwrap();

    assert!(engine.send_message("", None).is_err());
    assert!(engine.send_message(&"a".repeat(501), None).is_err());
    assert!(engine.authenticate_admin("nope").is_err());
    assert!(engine.clear_all().is_err());
    assert!(engine.join_group(GroupId(404)).is_err());
    assert!(engine.set_identity("").is_err());

    let after = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(before, after);
    assert!(engine.drain_events().is_empty());
}

#[test]
fn snapshot_reflects_session() {
    let mut engine = engine();
    engine.set_identity("Alice").unwrap();
    engine.send_message("oh shit", None).unwrap();
    engine.join_group(GroupId(3)).unwrap();

    let snap = engine.snapshot();
    assert_eq!(snap.identity.as_ref().map(|i| i.as_str()), Some("Alice"));
    assert_eq!(snap.flagged_count, 1);
    assert_eq!(snap.online.len(), 1);
    assert!(snap.groups.iter().any(|g| g.id == GroupId(3) && g.joined && g.member_count == 32));

    let json = serde_json::to_value(&snap).unwrap();
    assert_eq!(json["messages"][0]["author"], "Alice");
    assert_eq!(json["messages"][0]["flagged"], true);

    let events = engine.drain_events();
    assert!(matches!(events.first(), Some(SessionEvent::Joined { .. })));
    assert_eq!(events.len(), 3);
}
