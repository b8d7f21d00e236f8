use studyroom_shared::types::{GroupId, IdentityKey};
use thiserror::Error;

/// Errors produced by the store layer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The acting identity is on the ban list.
    #[error("Identity is banned: {0}")]
    Banned(IdentityKey),

    /// A message with neither text nor attachment.
    #[error("Message has no text and no attachment")]
    Empty,

    #[error("Message too long: {len} characters (max {max})")]
    MessageTooLong { len: usize, max: usize },

    #[error("Attachment too large: {size} bytes (max {max})")]
    AttachmentTooLarge { size: usize, max: usize },

    /// No group was seeded with this id.
    #[error("Group not found: {0}")]
    GroupNotFound(GroupId),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
