//! Session operations.
//!
//! Each sub-module adds an `impl SessionEngine` block for one concern.
//! Every operation validates first and mutates last, so a returned error
//! means nothing changed.

pub mod groups;
pub mod identity;
pub mod messaging;
pub mod moderation;
