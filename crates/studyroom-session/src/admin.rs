//! Single shared-secret admin gate.
//!
//! One process-wide flag, raised by presenting the configured secret and
//! lowered only by an explicit revoke. There is no lockout, no rate limiting
//! and no hashing: this gates what a trusted local client shows and allows,
//! and is not a security boundary. Anything exposed beyond such a client
//! needs per-operator credentials instead.

use subtle::ConstantTimeEq;

use crate::error::{Result, SessionError};

pub struct AdminGate {
    secret: String,
    elevated: bool,
}

impl AdminGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            elevated: false,
        }
    }

    /// Raise the admin flag if `password` matches the secret. A failed
    /// attempt leaves the flag as it was.
    pub fn authenticate(&mut self, password: &str) -> Result<()> {
        let given = password.as_bytes();
        let expected = self.secret.as_bytes();
        if given.len() != expected.len() || given.ct_eq(expected).unwrap_u8() != 1 {
            return Err(SessionError::InvalidCredentials);
        }
        self.elevated = true;
        Ok(())
    }

    pub fn revoke(&mut self) {
        self.elevated = false;
    }

    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    /// Fails with `Unauthorized` unless the flag is raised.
    pub fn require(&self) -> Result<()> {
        if self.elevated {
            Ok(())
        } else {
            Err(SessionError::Unauthorized)
        }
    }
}

impl std::fmt::Debug for AdminGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminGate")
            .field("elevated", &self.elevated)
            .finish_non_exhaustive()
    }
}
