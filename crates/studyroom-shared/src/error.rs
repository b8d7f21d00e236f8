use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Display name is blank")]
    Blank,

    #[error("Display name too long: {len} characters (max {max})")]
    TooLong { len: usize, max: usize },
}

#[derive(Error, Debug)]
pub enum ModerationError {
    #[error("Failed to build blocklist matcher: {0}")]
    Matcher(#[from] aho_corasick::BuildError),
}
