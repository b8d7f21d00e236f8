use thiserror::Error;

use studyroom_shared::error::IdentityError;
use studyroom_shared::types::{GroupId, IdentityKey};
use studyroom_store::StoreError;

/// Every way a session operation can be refused. None of them are fatal and
/// none leave partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Identity is banned: {0}")]
    Banned(IdentityKey),

    #[error("Admin privilege required")]
    Unauthorized,

    #[error("Invalid admin credentials")]
    InvalidCredentials,

    #[error("Message has no text and no attachment")]
    Empty,

    #[error("Group not found: {0}")]
    NotFound(GroupId),

    #[error("Invalid display name: {0}")]
    InvalidName(#[from] IdentityError),

    #[error("No display name set for this session")]
    NotNamed,

    #[error("Message too long: {len} characters (max {max})")]
    MessageTooLong { len: usize, max: usize },

    #[error("Attachment too large: {size} bytes (max {max})")]
    AttachmentTooLarge { size: usize, max: usize },
}

impl From<StoreError> for SessionError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Banned(key) => SessionError::Banned(key),
            StoreError::Empty => SessionError::Empty,
            StoreError::MessageTooLong { len, max } => SessionError::MessageTooLong { len, max },
            StoreError::AttachmentTooLarge { size, max } => {
                SessionError::AttachmentTooLarge { size, max }
            }
            StoreError::GroupNotFound(id) => SessionError::NotFound(id),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SessionError>;
