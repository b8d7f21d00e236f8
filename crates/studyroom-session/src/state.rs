//! The state aggregate owned by [`SessionEngine`](crate::SessionEngine).
//!
//! All mutable session data lives in one [`SessionState`]. Operations in
//! [`crate::commands`] are the only code that mutates it; everything else
//! sees it through shared references or a [`SessionSnapshot`].

use serde::Serialize;

use studyroom_shared::types::{Identity, IdentityKey};
use studyroom_store::{BanList, Group, GroupMembership, Message, MessageLog, PresenceRegistry};

use crate::admin::AdminGate;

/// Where the local user is in the session lifecycle. Admin elevation is
/// tracked separately and applies regardless of phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Anonymous,
    Named(Identity),
}

impl SessionPhase {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionPhase::Anonymous => None,
            SessionPhase::Named(identity) => Some(identity),
        }
    }
}

#[derive(Debug)]
pub struct SessionState {
    pub(crate) phase: SessionPhase,
    pub(crate) log: MessageLog,
    pub(crate) bans: BanList,
    pub(crate) presence: PresenceRegistry,
    pub(crate) groups: GroupMembership,
    pub(crate) admin: AdminGate,
}

impl SessionState {
    pub(crate) fn new(
        log: MessageLog,
        groups: GroupMembership,
        admin: AdminGate,
    ) -> Self {
        Self {
            phase: SessionPhase::Anonymous,
            log,
            bans: BanList::new(),
            presence: PresenceRegistry::new(),
            groups,
            admin,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn bans(&self) -> &BanList {
        &self.bans
    }

    pub fn presence(&self) -> &PresenceRegistry {
        &self.presence
    }

    pub fn groups(&self) -> &GroupMembership {
        &self.groups
    }

    pub fn is_admin(&self) -> bool {
        self.admin.is_elevated()
    }

    /// Whether the local user's current name is banned.
    pub fn self_banned(&self) -> bool {
        self.phase
            .identity()
            .map(|identity| self.bans.contains(&identity.key()))
            .unwrap_or(false)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            identity: self.phase.identity().cloned(),
            self_banned: self.self_banned(),
            admin: self.is_admin(),
            messages: self.log.messages().to_vec(),
            flagged_count: self.log.flagged_count(),
            banned: self.bans.list().to_vec(),
            online: self.presence.online().to_vec(),
            groups: self.groups.groups().to_vec(),
        }
    }
}

/// Owned, serializable view of the whole session for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    pub self_banned: bool,
    pub admin: bool,
    pub messages: Vec<Message>,
    pub flagged_count: usize,
    pub banned: Vec<IdentityKey>,
    pub online: Vec<Identity>,
    pub groups: Vec<Group>,
}
