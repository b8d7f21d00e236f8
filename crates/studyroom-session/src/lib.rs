//! # studyroom-session
//!
//! The session state engine for a single study-room chat. A presentation
//! layer owns one [`SessionEngine`], dispatches user actions into it and
//! renders [`SessionSnapshot`]s and drained [`SessionEvent`]s.
//!
//! Every public operation is a synchronous transition over one state
//! aggregate: it either applies completely or returns an error and leaves
//! the state untouched.

pub mod admin;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod state;

pub use config::EngineConfig;
pub use engine::SessionEngine;
pub use error::{Result, SessionError};
pub use events::SessionEvent;
pub use state::{SessionPhase, SessionSnapshot, SessionState};

pub use studyroom_store::{Attachment, Group, Message};
