//! Engine construction parameters.
//!
//! The blocklist and admin secret are deployment settings, not logic; the
//! defaults mirror the community chat the engine was built for, except the
//! admin secret, which is a development placeholder.

use studyroom_shared::constants::{
    DEFAULT_BLOCKED_WORDS, DEFAULT_GROUPS, DEV_ADMIN_SECRET, MAX_ATTACHMENT_SIZE,
    MAX_MESSAGE_CHARS, MAX_NAME_CHARS,
};
use studyroom_shared::types::GroupId;
use studyroom_store::Group;

#[derive(Clone)]
pub struct EngineConfig {
    /// Shared secret that elevates a session to admin.
    pub admin_secret: String,

    /// Tokens the moderation filter flags, matched case-insensitively as
    /// substrings.
    pub blocked_words: Vec<String>,

    /// Study groups seeded at startup.
    pub groups: Vec<Group>,

    pub max_name_chars: usize,
    pub max_message_chars: usize,
    pub max_attachment_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            admin_secret: DEV_ADMIN_SECRET.to_string(),
            blocked_words: DEFAULT_BLOCKED_WORDS.iter().map(|w| w.to_string()).collect(),
            groups: DEFAULT_GROUPS
                .iter()
                .map(|&(id, name, members)| Group::new(GroupId(id), name, members))
                .collect(),
            max_name_chars: MAX_NAME_CHARS,
            max_message_chars: MAX_MESSAGE_CHARS,
            max_attachment_bytes: MAX_ATTACHMENT_SIZE,
        }
    }
}

impl EngineConfig {
    pub fn with_admin_secret(mut self, secret: impl Into<String>) -> Self {
        self.admin_secret = secret.into();
        self
    }

    pub fn with_blocked_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocked_words = words.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_groups(mut self, groups: impl IntoIterator<Item = Group>) -> Self {
        self.groups = groups.into_iter().collect();
        self
    }

    /// Whether the development placeholder secret is still in use.
    pub fn uses_dev_secret(&self) -> bool {
        self.admin_secret == DEV_ADMIN_SECRET
    }
}

// The secret never appears in logs.
impl std::fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineConfig")
            .field("admin_secret", &"<redacted>")
            .field("blocked_words", &self.blocked_words.len())
            .field("groups", &self.groups.len())
            .field("max_name_chars", &self.max_name_chars)
            .field("max_message_chars", &self.max_message_chars)
            .field("max_attachment_bytes", &self.max_attachment_bytes)
            .finish()
    }
}
