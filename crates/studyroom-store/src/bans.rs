//! The set of identities barred from posting and joining.

use serde::Serialize;
use tracing::debug;

use studyroom_shared::types::IdentityKey;

/// Banned identities, kept in the order they were banned.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct BanList {
    keys: Vec<IdentityKey>,
}

impl BanList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ban. Returns `false` if the identity was already banned.
    pub fn ban(&mut self, key: IdentityKey) -> bool {
        if self.keys.contains(&key) {
            debug!(identity = %key, "Already banned");
            return false;
        }
        self.keys.push(key);
        true
    }

    /// Lift a ban. Returns `false` if the identity was not banned.
    pub fn unban(&mut self, key: &IdentityKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        before != self.keys.len()
    }

    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.keys.contains(key)
    }

    pub fn list(&self) -> &[IdentityKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
