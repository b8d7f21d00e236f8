use serde::Serialize;

use studyroom_shared::types::{GroupId, Identity, IdentityKey, MessageId};

/// Notices produced by state changes, queued until the presentation layer
/// drains them. No-op operations queue nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    Joined { name: Identity },
    Left { name: Identity },
    MessagePosted {
        id: MessageId,
        author: Identity,
        flagged: bool,
    },
    AdminGranted,
    AdminRevoked,
    UserBanned { name: IdentityKey },
    UserUnbanned { name: IdentityKey },
    MessageDeleted { id: MessageId },
    FlaggedCleared { removed: usize },
    LogCleared { removed: usize },
    PresenceCleared { removed: usize },
    GroupJoined { id: GroupId },
    GroupLeft { id: GroupId },
}
