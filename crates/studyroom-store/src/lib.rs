//! # studyroom-store
//!
//! In-memory state for one chat session: the ordered message log, the ban
//! list, the simulated presence list and study-group membership.
//!
//! Nothing here is persisted and nothing checks admin privilege; the
//! session engine owns every store and decides who may call what.

pub mod bans;
pub mod groups;
pub mod messages;
pub mod models;
pub mod presence;

mod error;

pub use bans::BanList;
pub use error::{Result, StoreError};
pub use groups::GroupMembership;
pub use messages::MessageLog;
pub use models::*;
pub use presence::PresenceRegistry;
