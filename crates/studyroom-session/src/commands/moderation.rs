//! Admin login and the privileged operations it unlocks.

use tracing::{debug, info, warn};

use studyroom_shared::error::IdentityError;
use studyroom_shared::types::{IdentityKey, MessageId};

use crate::engine::SessionEngine;
use crate::error::{Result, SessionError};
use crate::events::SessionEvent;

impl SessionEngine {
    // ------------------------------------------------------------------
    // Privilege
    // ------------------------------------------------------------------

    /// Re-entering the password while elevated succeeds quietly.
    pub fn authenticate_admin(&mut self, password: &str) -> Result<()> {
        let was_admin = self.state.admin.is_elevated();
        if let Err(e) = self.state.admin.authenticate(password) {
            warn!("Admin login rejected");
            return Err(e);
        }
        if !was_admin {
            info!("Admin access granted");
            self.emit(SessionEvent::AdminGranted);
        }
        Ok(())
    }

    /// Always succeeds, whether or not the session was elevated.
    pub fn revoke_admin(&mut self) {
        let was_admin = self.state.admin.is_elevated();
        self.state.admin.revoke();
        if was_admin {
            info!("Admin mode exited");
            self.emit(SessionEvent::AdminRevoked);
        }
    }

    pub fn is_admin(&self) -> bool {
        self.state.admin.is_elevated()
    }

    // ------------------------------------------------------------------
    // Bans
    // ------------------------------------------------------------------

    /// Ban `name` (case-insensitively) and drop every presence entry for
    /// it. Returns `false` if it was already banned.
    pub fn ban_user(&mut self, name: &str) -> Result<bool> {
        self.state.admin.require()?;
        let key = ban_key(name)?;

        let added = self.state.bans.ban(key.clone());
        let kicked = self.state.presence.remove_all(&key);

        if added {
            info!(name = %key, kicked, "User banned");
            self.emit(SessionEvent::UserBanned { name: key });
        }
        Ok(added)
    }

    /// Returns `false` if `name` was not banned.
    pub fn unban_user(&mut self, name: &str) -> Result<bool> {
        self.state.admin.require()?;
        let key = ban_key(name)?;

        let removed = self.state.bans.unban(&key);
        if removed {
            info!(name = %key, "User unbanned");
            self.emit(SessionEvent::UserUnbanned { name: key });
        } else {
            debug!(name = %key, "Unban of non-banned user ignored");
        }
        Ok(removed)
    }

    pub fn banned(&self) -> &[IdentityKey] {
        self.state.bans.list()
    }

    pub fn is_banned(&self, name: &str) -> bool {
        self.state.bans.contains(&IdentityKey::from_name(name))
    }

    // ------------------------------------------------------------------
    // Log maintenance
    // ------------------------------------------------------------------

    /// Returns `false` if no message had this id.
    pub fn delete_message(&mut self, id: MessageId) -> Result<bool> {
        self.state.admin.require()?;

        let deleted = self.state.log.delete(id);
        if deleted {
            info!(msg_id = %id, "Message deleted");
            self.emit(SessionEvent::MessageDeleted { id });
        }
        Ok(deleted)
    }

    pub fn clear_flagged(&mut self) -> Result<usize> {
        self.state.admin.require()?;

        let removed = self.state.log.clear_flagged();
        info!(removed, "Flagged messages cleared");
        if removed > 0 {
            self.emit(SessionEvent::FlaggedCleared { removed });
        }
        Ok(removed)
    }

    pub fn clear_all(&mut self) -> Result<usize> {
        self.state.admin.require()?;

        let removed = self.state.log.clear_all();
        info!(removed, "Chat log cleared");
        if removed > 0 {
            self.emit(SessionEvent::LogCleared { removed });
        }
        Ok(removed)
    }

    // ------------------------------------------------------------------
    // Presence
    // ------------------------------------------------------------------

    /// Empty the online list. The local user keeps their name.
    pub fn kick_all(&mut self) -> Result<usize> {
        self.state.admin.require()?;

        let removed = self.state.presence.kick_all();
        info!(removed, "Online list cleared");
        if removed > 0 {
            self.emit(SessionEvent::PresenceCleared { removed });
        }
        Ok(removed)
    }
}

fn ban_key(name: &str) -> Result<IdentityKey> {
    let key = IdentityKey::from_name(name);
    if key.as_str().is_empty() {
        return Err(SessionError::InvalidName(IdentityError::Blank));
    }
    Ok(key)
}
