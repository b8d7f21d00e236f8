//! Simulated "who is online" list for a single local session.
//!
//! Entries are raw display names. The same name may appear more than once:
//! joining twice produces two entries and the online count reflects both.

use serde::Serialize;

use studyroom_shared::types::{Identity, IdentityKey};

use crate::bans::BanList;
use crate::error::{Result, StoreError};

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PresenceRegistry {
    online: Vec<Identity>,
}

impl PresenceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an identity as online unless it is banned.
    pub fn join(&mut self, identity: Identity, bans: &BanList) -> Result<()> {
        let key = identity.key();
        if bans.contains(&key) {
            return Err(StoreError::Banned(key));
        }
        self.online.push(identity);
        Ok(())
    }

    /// Remove the first entry with exactly this display name.
    pub fn leave(&mut self, identity: &Identity) -> bool {
        match self.online.iter().position(|i| i == identity) {
            Some(pos) => {
                self.online.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Remove every entry whose name normalizes to `key`. Returns how many
    /// entries were dropped.
    pub fn remove_all(&mut self, key: &IdentityKey) -> usize {
        let before = self.online.len();
        self.online.retain(|i| &i.key() != key);
        before - self.online.len()
    }

    pub fn kick_all(&mut self) -> usize {
        let removed = self.online.len();
        self.online.clear();
        removed
    }

    pub fn online(&self) -> &[Identity] {
        &self.online
    }

    pub fn count(&self) -> usize {
        self.online.len()
    }

    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.online.iter().any(|i| &i.key() == key)
    }
}
