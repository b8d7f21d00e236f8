//! # studyroom-shared
//!
//! Types and policy shared by every crate of the study-room chat engine:
//! display identities and their normalized keys, message and group ids,
//! size limits, and the blocklist-based [`moderation::ModerationFilter`].

pub mod constants;
pub mod error;
pub mod moderation;
pub mod types;
