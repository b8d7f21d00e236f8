use aho_corasick::AhoCorasick;
use serde::Serialize;

use crate::constants::DEFAULT_BLOCKED_WORDS;
use crate::error::ModerationError;

/// Outcome of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub flagged: bool,
    /// First blocked token found, lowercased.
    pub token: Option<String>,
}

impl Verdict {
    fn clean() -> Self {
        Self {
            flagged: false,
            token: None,
        }
    }
}

// Case-insensitive substring blocklist. Not word-boundary aware: "mc" hits
// inside "mcq" as well. Text and tokens are both lowercased before matching
// so non-ASCII tokens fold the same way as ASCII ones.
#[derive(Debug, Clone)]
pub struct ModerationFilter {
    matcher: AhoCorasick,
    tokens: Vec<String>,
}

impl ModerationFilter {
    pub fn new<I, S>(tokens: I) -> Result<Self, ModerationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for token in tokens {
            let token = token.as_ref().trim().to_lowercase();
            // A blank token would match every message.
            if token.is_empty() || normalized.contains(&token) {
                continue;
            }
            normalized.push(token);
        }

        let matcher = AhoCorasick::new(&normalized)?;

        Ok(Self {
            matcher,
            tokens: normalized,
        })
    }

    pub fn with_default_blocklist() -> Result<Self, ModerationError> {
        Self::new(DEFAULT_BLOCKED_WORDS.iter().copied())
    }

    pub fn classify(&self, text: &str) -> Verdict {
        if text.is_empty() {
            return Verdict::clean();
        }

        let lowered = text.to_lowercase();
        match self.matcher.find(&lowered) {
            Some(hit) => Verdict {
                flagged: true,
                token: Some(self.tokens[hit.pattern().as_usize()].clone()),
            },
            None => Verdict::clean(),
        }
    }

    pub fn is_blocked(&self, text: &str) -> bool {
        self.classify(text).flagged
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}
