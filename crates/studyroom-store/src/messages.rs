//! The ordered chat log.
//!
//! Messages are appended in submission order and carry the moderation
//! verdict computed at submit time. Flagging never blocks delivery; flagged
//! messages stay visible until an explicit removal.

use chrono::Utc;
use serde::Serialize;
use tracing::debug;

use studyroom_shared::constants::{ATTACHMENT_MARKER, MAX_ATTACHMENT_SIZE, MAX_MESSAGE_CHARS};
use studyroom_shared::moderation::{ModerationFilter, Verdict};
use studyroom_shared::types::{Identity, MessageId};

use crate::bans::BanList;
use crate::error::{Result, StoreError};
use crate::models::{Attachment, Message};

#[derive(Debug, Clone, Serialize)]
pub struct MessageLog {
    messages: Vec<Message>,
    /// Id handed to the next submission. Only ever grows.
    #[serde(skip)]
    next_id: MessageId,
    #[serde(skip)]
    max_chars: usize,
    #[serde(skip)]
    max_attachment_bytes: usize,
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(MAX_MESSAGE_CHARS, MAX_ATTACHMENT_SIZE)
    }
}

impl MessageLog {
    pub fn new(max_chars: usize, max_attachment_bytes: usize) -> Self {
        Self {
            messages: Vec::new(),
            next_id: MessageId(1),
            max_chars,
            max_attachment_bytes,
        }
    }

    /// Validate, classify and append a message.
    ///
    /// Checks run in a fixed order (ban, emptiness, text length, attachment
    /// size) and nothing is mutated unless all of them pass. The length
    /// limit applies to the stored text, including the marker text that
    /// stands in for an attachment-only message. Returns the logged message
    /// together with the filter's verdict.
    pub fn submit(
        &mut self,
        author: &Identity,
        text: &str,
        attachment: Option<Attachment>,
        bans: &BanList,
        filter: &ModerationFilter,
    ) -> Result<(Message, Verdict)> {
        let key = author.key();
        if bans.contains(&key) {
            return Err(StoreError::Banned(key));
        }

        let caption = text.trim();
        let text = match &attachment {
            None if caption.is_empty() => return Err(StoreError::Empty),
            Some(a) if caption.is_empty() => format!("{ATTACHMENT_MARKER} {}", a.file_name),
            _ => caption.to_string(),
        };

        let len = text.chars().count();
        if len > self.max_chars {
            return Err(StoreError::MessageTooLong {
                len,
                max: self.max_chars,
            });
        }

        if let Some(ref a) = attachment {
            if a.size > self.max_attachment_bytes {
                return Err(StoreError::AttachmentTooLarge {
                    size: a.size,
                    max: self.max_attachment_bytes,
                });
            }
        }

        let verdict = filter.classify(&text);

        let message = Message {
            id: self.next_id,
            author: author.clone(),
            text,
            created_at: Utc::now(),
            attachment,
            flagged: verdict.flagged,
        };
        self.next_id = self.next_id.next();
        self.messages.push(message.clone());

        Ok((message, verdict))
    }

    /// Remove one message. Returns `false` if no message had this id.
    pub fn delete(&mut self, id: MessageId) -> bool {
        match self.messages.iter().position(|m| m.id == id) {
            Some(pos) => {
                self.messages.remove(pos);
                true
            }
            None => {
                debug!(msg_id = %id, "Delete of unknown message ignored");
                false
            }
        }
    }

    /// Remove every flagged message, keeping the rest in order.
    pub fn clear_flagged(&mut self) -> usize {
        let before = self.messages.len();
        self.messages.retain(|m| !m.flagged);
        before - self.messages.len()
    }

    pub fn clear_all(&mut self) -> usize {
        let removed = self.messages.len();
        self.messages.clear();
        removed
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    pub fn list_flagged(&self) -> Vec<&Message> {
        self.messages.iter().filter(|m| m.flagged).collect()
    }

    pub fn flagged_count(&self) -> usize {
        self.messages.iter().filter(|m| m.flagged).count()
    }

    pub fn count(&self) -> usize {
        self.messages.len()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn max_attachment_bytes(&self) -> usize {
        self.max_attachment_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use studyroom_shared::types::IdentityKey;

    fn alice() -> Identity {
        Identity::parse("Alice", 50).unwrap()
    }

    fn filter() -> ModerationFilter {
        ModerationFilter::new(["shit"]).unwrap()
    }

    #[test]
    fn test_flagged_messages_are_still_logged() {
        let mut log = MessageLog::default();
        let bans = BanList::new();

        let (msg, verdict) = log
            .submit(&alice(), "this is shit", None, &bans, &filter())
            .unwrap();
        assert!(msg.flagged);
        assert_eq!(verdict.token.as_deref(), Some("shit"));
        assert_eq!(log.count(), 1);
        assert_eq!(log.list_flagged()[0].id, msg.id);
    }

    #[test]
    fn test_banned_author_rejected_without_side_effects() {
        let mut log = MessageLog::default();
        let mut bans = BanList::new();
        bans.ban(IdentityKey::from_name("alice"));

        let err = log
            .submit(&alice(), "hello", None, &bans, &filter())
            .unwrap_err();
        assert!(matches!(err, StoreError::Banned(_)));
        assert_eq!(log.count(), 0);

        // The rejected attempt did not consume an id.
        bans.unban(&IdentityKey::from_name("alice"));
        let (msg, _) = log.submit(&alice(), "hello", None, &bans, &filter()).unwrap();
        assert_eq!(msg.id, MessageId(1));
    }

    #[test]
    fn test_empty_and_oversized_rejected() {
        let mut log = MessageLog::new(10, 4);
        let bans = BanList::new();

        assert_eq!(
            log.submit(&alice(), "   ", None, &bans, &filter()),
            Err(StoreError::Empty)
        );
        assert_eq!(
            log.submit(&alice(), "12345678901", None, &bans, &filter()),
            Err(StoreError::MessageTooLong { len: 11, max: 10 })
        );
        assert_eq!(
            log.submit(
                &alice(),
                "",
                Some(Attachment::new("big.bin", vec![0u8; 5])),
                &bans,
                &filter()
            ),
            Err(StoreError::AttachmentTooLarge { size: 5, max: 4 })
        );
        assert_eq!(log.count(), 0);
    }

    #[test]
    fn test_attachment_only_gets_marker_text_which_is_classified() {
        let mut log = MessageLog::default();
        let bans = BanList::new();

        let (plain, _) = log
            .submit(
                &alice(),
                "",
                Some(Attachment::new("notes.png", vec![1u8])),
                &bans,
                &filter(),
            )
            .unwrap();
        assert_eq!(plain.text, "[attachment] notes.png");
        assert!(!plain.flagged);

        let (crafted, _) = log
            .submit(
                &alice(),
                "",
                Some(Attachment::new("holy_SHIT.png", vec![1u8])),
                &bans,
                &filter(),
            )
            .unwrap();
        assert!(crafted.flagged);

        let (captioned, _) = log
            .submit(
                &alice(),
                "my notes",
                Some(Attachment::new("shit.png", vec![1u8])),
                &bans,
                &filter(),
            )
            .unwrap();
        assert_eq!(captioned.text, "my notes");
        assert!(!captioned.flagged);
    }

    #[test]
    fn test_attachment_marker_counts_toward_length_limit() {
        let mut log = MessageLog::default();
        let bans = BanList::new();
        let long_name = format!("{}.png", "a".repeat(600));

        assert_eq!(
            log.submit(
                &alice(),
                "",
                Some(Attachment::new(long_name, vec![1u8])),
                &bans,
                &filter()
            ),
            Err(StoreError::MessageTooLong { len: 617, max: 500 })
        );
        assert_eq!(log.count(), 0);

        // A short caption replaces the marker, so the same file is accepted.
        let (msg, _) = log
            .submit(
                &alice(),
                "diagram",
                Some(Attachment::new("a".repeat(600), vec![1u8])),
                &bans,
                &filter(),
            )
            .unwrap();
        assert!(msg.text.chars().count() <= log.max_chars());
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut log = MessageLog::default();
        let bans = BanList::new();

        let (first, _) = log.submit(&alice(), "one", None, &bans, &filter()).unwrap();
        assert!(log.delete(first.id));
        assert!(!log.delete(first.id));
        log.clear_all();

        let (second, _) = log.submit(&alice(), "two", None, &bans, &filter()).unwrap();
        assert!(second.id > first.id);
    }

    /// Property: clear_flagged removes exactly the flagged messages and keeps
    /// the survivors in their original relative order.
    #[test]
    fn property_clear_flagged_keeps_clean_order() {
        let bans = BanList::new();
        let f = filter();
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            let mut log = MessageLog::default();
            for i in 0..rng.gen_range(0..30) {
                let text = if rng.gen_bool(0.3) {
                    format!("msg {i} shit")
                } else {
                    format!("msg {i}")
                };
                log.submit(&alice(), &text, None, &bans, &f).unwrap();
            }

            let expected: Vec<MessageId> = log
                .messages()
                .iter()
                .filter(|m| !m.flagged)
                .map(|m| m.id)
                .collect();
            let flagged = log.flagged_count();

            assert_eq!(log.clear_flagged(), flagged);
            let kept: Vec<MessageId> = log.messages().iter().map(|m| m.id).collect();
            assert_eq!(kept, expected);
            assert!(log.list_flagged().is_empty());
        }
    }
}
