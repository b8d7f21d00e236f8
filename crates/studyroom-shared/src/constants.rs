/// Application name
pub const APP_NAME: &str = "Study Room";

/// Maximum display name length in characters
pub const MAX_NAME_CHARS: usize = 50;

/// Maximum message text length in characters
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Maximum attachment size in bytes (5 MiB)
pub const MAX_ATTACHMENT_SIZE: usize = 5 * 1024 * 1024;

/// Prefix of the synthetic text given to attachment-only messages
pub const ATTACHMENT_MARKER: &str = "[attachment]";

/// Undrained notices kept by a session engine; older ones are dropped first.
pub const MAX_PENDING_EVENTS: usize = 1024;

/// Development admin secret. Deployments must override it.
pub const DEV_ADMIN_SECRET: &str = "change-me";

/// Blocklist shipped with the community chat.
///
/// Matching is substring based, so short tokens such as `mc` also hit inside
/// longer words.
pub const DEFAULT_BLOCKED_WORDS: &[&str] = &[
    "gaali", "abuse", "curse", "fuck", "shit", "asshole", "bastard", "mc", "bc", "chod",
];

/// Study groups every session starts with: (id, name, member count).
pub const DEFAULT_GROUPS: &[(u32, &str, u32)] = &[
    (1, "Physics Help Group", 23),
    (2, "Chemistry Doubts", 18),
    (3, "Math Problem Solving", 31),
];
