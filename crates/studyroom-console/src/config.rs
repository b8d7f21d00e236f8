//! Console configuration loaded from environment variables.
//!
//! All settings have sensible defaults so the console can start with zero
//! configuration for local use.

use studyroom_session::EngineConfig;

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Settings handed to the session engine.
    pub engine: EngineConfig,

    /// Text printed before each input line.
    /// Env: `STUDYROOM_PROMPT`
    /// Default: `"> "`
    pub prompt: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            prompt: "> ".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    ///
    /// Recognised keys:
    /// - `STUDYROOM_ADMIN_SECRET`: admin password (default: development
    ///   placeholder, which triggers a warning at startup)
    /// - `STUDYROOM_BLOCKED_WORDS`: comma-separated blocklist
    /// - `STUDYROOM_MAX_MESSAGE_CHARS`: positive integer
    /// - `STUDYROOM_PROMPT`: input prompt
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secret) = lookup("STUDYROOM_ADMIN_SECRET") {
            if secret.is_empty() {
                tracing::warn!("Empty STUDYROOM_ADMIN_SECRET ignored, using default");
            } else {
                config.engine.admin_secret = secret;
            }
        }

        if let Some(words) = lookup("STUDYROOM_BLOCKED_WORDS") {
            config.engine.blocked_words = parse_word_list(&words);
        }

        if let Some(val) = lookup("STUDYROOM_MAX_MESSAGE_CHARS") {
            match val.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.engine.max_message_chars = n,
                _ => {
                    tracing::warn!(
                        value = %val,
                        "Invalid STUDYROOM_MAX_MESSAGE_CHARS, using default"
                    );
                }
            }
        }

        if let Some(prompt) = lookup("STUDYROOM_PROMPT") {
            config.prompt = prompt;
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter,
        // so we do not store it here.

        config
    }
}

/// Split a comma-separated list, dropping blank entries.
fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::from_lookup(lookup(&[]));
        assert_eq!(config.prompt, "> ");
        assert!(config.engine.uses_dev_secret());
        assert_eq!(config.engine.max_message_chars, 500);
    }

    #[test]
    fn test_overrides() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("STUDYROOM_ADMIN_SECRET", "s3cret"),
            ("STUDYROOM_BLOCKED_WORDS", " spam, ,Scam ,"),
            ("STUDYROOM_MAX_MESSAGE_CHARS", "120"),
            ("STUDYROOM_PROMPT", "study> "),
        ]));
        assert_eq!(config.engine.admin_secret, "s3cret");
        assert_eq!(config.engine.blocked_words, ["spam", "Scam"]);
        assert_eq!(config.engine.max_message_chars, 120);
        assert_eq!(config.prompt, "study> ");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("STUDYROOM_ADMIN_SECRET", ""),
            ("STUDYROOM_MAX_MESSAGE_CHARS", "0"),
        ]));
        assert!(config.engine.uses_dev_secret());
        assert_eq!(config.engine.max_message_chars, 500);
    }

    #[test]
    fn test_parse_word_list() {
        assert!(parse_word_list("").is_empty());
        assert_eq!(parse_word_list("a,b"), ["a", "b"]);
    }
}
