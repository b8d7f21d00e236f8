use tracing::{debug, info, warn};

use studyroom_shared::types::Identity;

use crate::engine::SessionEngine;
use crate::error::{Result, SessionError};
use crate::events::SessionEvent;
use crate::state::SessionPhase;

impl SessionEngine {
    /// Enter the session under `name`, or switch to a new name.
    ///
    /// The name is trimmed and length-checked, then refused if banned
    /// (case-insensitively). Switching names does not release earlier
    /// presence entries, so entering twice under one name lists it twice.
    pub fn set_identity(&mut self, name: &str) -> Result<Identity> {
        let identity = Identity::parse(name, self.max_name_chars)?;

        let key = identity.key();
        if self.state.bans.contains(&key) {
            warn!(name = %identity, "Banned name refused");
            return Err(SessionError::Banned(key));
        }

        self.state.presence.join(identity.clone(), &self.state.bans)?;
        self.state.phase = SessionPhase::Named(identity.clone());

        info!(name = %identity, online = self.state.presence.count(), "Identity set");
        self.emit(SessionEvent::Joined {
            name: identity.clone(),
        });
        Ok(identity)
    }

    /// Drop back to anonymous, releasing one presence entry for the
    /// current name.
    pub fn leave_session(&mut self) {
        match std::mem::take(&mut self.state.phase) {
            SessionPhase::Named(identity) => {
                if self.state.presence.leave(&identity) {
                    info!(name = %identity, "Left session");
                    self.emit(SessionEvent::Left { name: identity });
                } else {
                    debug!(name = %identity, "Left session with no presence entry");
                }
            }
            SessionPhase::Anonymous => debug!("Leave while anonymous ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use studyroom_shared::error::IdentityError;
    use studyroom_shared::types::IdentityKey;

    fn engine() -> SessionEngine {
        SessionEngine::new(EngineConfig::default().with_admin_secret("pw")).unwrap()
    }

    fn online(engine: &SessionEngine) -> Vec<String> {
        engine
            .state()
            .presence()
            .online()
            .iter()
            .map(|i| i.to_string())
            .collect()
    }

    #[test]
    fn test_set_identity_registers_presence() {
        let mut engine = engine();
        let id = engine.set_identity("  Alice ").unwrap();
        assert_eq!(id.as_str(), "Alice");
        assert_eq!(engine.identity(), Some(&id));
        assert_eq!(online(&engine), ["Alice"]);
        assert_eq!(
            engine.drain_events(),
            vec![SessionEvent::Joined { name: id }]
        );
    }

    #[test]
    fn test_invalid_names_rejected() {
        let mut engine = engine();
        assert_eq!(
            engine.set_identity("   "),
            Err(SessionError::InvalidName(IdentityError::Blank))
        );
        assert!(matches!(
            engine.set_identity(&"x".repeat(51)),
            Err(SessionError::InvalidName(IdentityError::TooLong { .. }))
        ));
        assert!(engine.identity().is_none());
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_banned_name_refused_and_previous_kept() {
        let mut engine = engine();
        engine.authenticate_admin("pw").unwrap();
        engine.ban_user("mallory").unwrap();
        engine.set_identity("Bob").unwrap();

        assert_eq!(
            engine.set_identity("MALLORY"),
            Err(SessionError::Banned(IdentityKey::from_name("mallory")))
        );
        assert_eq!(engine.identity().map(|i| i.as_str()), Some("Bob"));
        assert_eq!(online(&engine), ["Bob"]);
    }

    #[test]
    fn test_switching_name_keeps_earlier_entries() {
        let mut engine = engine();
        engine.set_identity("Alice").unwrap();
        engine.set_identity("Alicia").unwrap();
        assert_eq!(engine.identity().map(|i| i.as_str()), Some("Alicia"));
        assert_eq!(online(&engine), ["Alice", "Alicia"]);
    }

    #[test]
    fn test_same_name_twice_is_listed_twice() {
        let mut engine = engine();
        engine.set_identity("Alice").unwrap();
        engine.set_identity("Alice").unwrap();
        assert_eq!(engine.state().presence().count(), 2);
        assert_eq!(online(&engine), ["Alice", "Alice"]);

        engine.leave_session();
        assert_eq!(online(&engine), ["Alice"]);
    }

    #[test]
    fn test_leave_after_ban_emits_nothing() {
        let mut engine = engine();
        engine.authenticate_admin("pw").unwrap();
        engine.set_identity("Alice").unwrap();
        engine.ban_user("alice").unwrap();
        engine.drain_events();

        engine.leave_session();
        assert!(engine.identity().is_none());
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_leave_session() {
        let mut engine = engine();
        engine.set_identity("Alice").unwrap();
        engine.leave_session();
        assert!(engine.identity().is_none());
        assert!(online(&engine).is_empty());

        engine.drain_events();
        engine.leave_session();
        assert!(engine.drain_events().is_empty());
    }
}
