use tracing::info;

use studyroom_shared::types::GroupId;
use studyroom_store::Group;

use crate::engine::SessionEngine;
use crate::error::Result;
use crate::events::SessionEvent;

impl SessionEngine {
    /// Join a study group. Joining twice counts once; returns `false` on the
    /// repeat.
    pub fn join_group(&mut self, id: GroupId) -> Result<bool> {
        let joined = self.state.groups.join(id)?;
        if joined {
            info!(group = %id, "Joined group");
            self.emit(SessionEvent::GroupJoined { id });
        }
        Ok(joined)
    }

    /// Leave a study group. Returns `false` if it was not joined.
    pub fn leave_group(&mut self, id: GroupId) -> Result<bool> {
        let left = self.state.groups.leave(id)?;
        if left {
            info!(group = %id, "Left group");
            self.emit(SessionEvent::GroupLeft { id });
        }
        Ok(left)
    }

    pub fn groups(&self) -> &[Group] {
        self.state.groups.groups()
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.state.groups.get(id)
    }
}
