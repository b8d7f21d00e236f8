//! Domain model structs held by the in-memory stores.
//!
//! Every struct derives `Serialize` so it can be handed directly to a
//! presentation layer.

use bytes::Bytes;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studyroom_shared::types::{GroupId, Identity, MessageId};

// ---------------------------------------------------------------------------
// Attachment
// ---------------------------------------------------------------------------

/// A file attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    /// Unique attachment identifier.
    pub id: Uuid,
    /// Original file name, as given by the sender.
    pub file_name: String,
    /// Payload size in bytes.
    pub size: usize,
    /// BLAKE3 content hash (hex string).
    pub blake3_hash: String,
    /// Raw payload. Not serialized; consumers fetch it from the message.
    #[serde(skip)]
    pub data: Bytes,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            size: data.len(),
            blake3_hash: hex::encode(blake3::hash(&data).as_bytes()),
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single chat message, immutable once logged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Submission-order identifier.
    pub id: MessageId,
    /// Display name of the sender.
    pub author: Identity,
    /// Effective text: the caption, or a synthetic marker for
    /// attachment-only messages.
    pub text: String,
    /// When the message was submitted. Display only; ordering uses `id`.
    pub created_at: DateTime<Utc>,
    pub attachment: Option<Attachment>,
    /// Set when the text matched the moderation blocklist.
    pub flagged: bool,
}

impl Message {
    /// Local wall-clock time as `HH:MM`.
    pub fn display_time(&self) -> String {
        self.created_at
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Group
// ---------------------------------------------------------------------------

/// A study group. Seeded at startup; only `member_count` and `joined`
/// ever change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub member_count: u32,
    /// Whether this session has joined the group.
    pub joined: bool,
}

impl Group {
    pub fn new(id: GroupId, name: impl Into<String>, member_count: u32) -> Self {
        Self {
            id,
            name: name.into(),
            member_count,
            joined: false,
        }
    }
}
