use tracing::{info, warn};

use studyroom_shared::types::MessageId;
use studyroom_store::{Attachment, Message};

use crate::engine::SessionEngine;
use crate::error::{Result, SessionError};
use crate::events::SessionEvent;

impl SessionEngine {
    /// Post a message as the current identity.
    ///
    /// Flagged messages are logged like any other; the verdict is only an
    /// annotation for moderators.
    pub fn send_message(
        &mut self,
        text: &str,
        attachment: Option<Attachment>,
    ) -> Result<Message> {
        let author = self
            .state
            .phase
            .identity()
            .cloned()
            .ok_or(SessionError::NotNamed)?;

        let (message, verdict) = self.state.log.submit(
            &author,
            text,
            attachment,
            &self.state.bans,
            &self.filter,
        )?;

        if verdict.flagged {
            warn!(
                msg_id = %message.id,
                author = %author,
                token = verdict.token.as_deref().unwrap_or_default(),
                "Message flagged by moderation filter"
            );
        } else {
            info!(msg_id = %message.id, author = %author, "Message posted");
        }

        self.emit(SessionEvent::MessagePosted {
            id: message.id,
            author,
            flagged: message.flagged,
        });
        Ok(message)
    }

    pub fn messages(&self) -> &[Message] {
        self.state.log.messages()
    }

    pub fn message(&self, id: MessageId) -> Option<&Message> {
        self.state.log.get(id)
    }

    /// Flagged messages in submission order, for moderation review.
    pub fn list_flagged(&self) -> Vec<&Message> {
        self.state.log.list_flagged()
    }

    pub fn message_count(&self) -> usize {
        self.state.log.count()
    }
}
