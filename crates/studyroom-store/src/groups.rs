//! Study-group membership for the local session.

use serde::Serialize;
use tracing::debug;

use studyroom_shared::types::GroupId;

use crate::error::{Result, StoreError};
use crate::models::Group;

/// Fixed set of groups with a per-session joined flag.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct GroupMembership {
    groups: Vec<Group>,
}

impl GroupMembership {
    pub fn new(seed: impl IntoIterator<Item = Group>) -> Self {
        Self {
            groups: seed.into_iter().collect(),
        }
    }

    /// Join a group. Returns `false` when already joined, in which case the
    /// member count is left alone.
    pub fn join(&mut self, id: GroupId) -> Result<bool> {
        let group = self.get_mut(id)?;
        if group.joined {
            debug!(group = %id, "Already joined");
            return Ok(false);
        }
        group.joined = true;
        group.member_count = group.member_count.saturating_add(1);
        Ok(true)
    }

    /// Leave a group. Returns `false` when not joined. The count never
    /// drops below zero.
    pub fn leave(&mut self, id: GroupId) -> Result<bool> {
        let group = self.get_mut(id)?;
        if !group.joined {
            debug!(group = %id, "Not a member");
            return Ok(false);
        }
        group.joined = false;
        group.member_count = group.member_count.saturating_sub(1);
        Ok(true)
    }

    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    fn get_mut(&mut self, id: GroupId) -> Result<&mut Group> {
        self.groups
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or(StoreError::GroupNotFound(id))
    }
}
