use std::collections::VecDeque;

use tracing::{info, trace};

use studyroom_shared::constants::MAX_PENDING_EVENTS;
use studyroom_shared::error::ModerationError;
use studyroom_shared::moderation::ModerationFilter;
use studyroom_shared::types::Identity;
use studyroom_store::{GroupMembership, MessageLog};

use crate::admin::AdminGate;
use crate::config::EngineConfig;
use crate::events::SessionEvent;
use crate::state::{SessionSnapshot, SessionState};

/// Entry point for one chat session.
///
/// Operations are implemented per concern in [`crate::commands`]; this
/// module holds construction and the read-side helpers.
#[derive(Debug)]
pub struct SessionEngine {
    pub(crate) state: SessionState,
    pub(crate) filter: ModerationFilter,
    pub(crate) max_name_chars: usize,
    events: VecDeque<SessionEvent>,
}

impl SessionEngine {
    /// Build an engine from `config`. Fails only if the blocklist cannot be
    /// compiled into a matcher.
    pub fn new(config: EngineConfig) -> Result<Self, ModerationError> {
        let filter = ModerationFilter::new(&config.blocked_words)?;

        info!(
            blocked_words = filter.tokens().len(),
            groups = config.groups.len(),
            "Session engine ready"
        );

        let state = SessionState::new(
            MessageLog::new(config.max_message_chars, config.max_attachment_bytes),
            GroupMembership::new(config.groups),
            AdminGate::new(config.admin_secret),
        );

        Ok(Self {
            state,
            filter,
            max_name_chars: config.max_name_chars,
            events: VecDeque::new(),
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.snapshot()
    }

    /// The local user's display name, once set.
    pub fn identity(&self) -> Option<&Identity> {
        self.state.phase.identity()
    }

    pub fn filter(&self) -> &ModerationFilter {
        &self.filter
    }

    /// Take every queued notice, oldest first.
    ///
    /// At most [`MAX_PENDING_EVENTS`] notices are held between drains; once
    /// the queue is full the oldest one is discarded for each new event.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn emit(&mut self, event: SessionEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            trace!("Event queue full, dropping oldest notice");
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}
