//! Sensitive-topic detection.
//!
//! A fixed-phrase detector: messages matching any configured phrase bypass
//! all other conversation logic and are handed off to a human channel. No
//! semantic classification is implied; the phrase list is domain policy and
//! comes from configuration (the reference deployment flags personal-finance
//! and investment solicitation).

/// Flags messages that touch configured sensitive phrases.
///
/// An empty phrase list never flags anything, so deployments without a
/// policy degrade gracefully rather than failing at startup.
#[derive(Debug, Clone, Default)]
pub struct SensitiveTopicDetector {
    phrases: Vec<String>,
}

impl SensitiveTopicDetector {
    /// Creates a detector over the given phrase list.
    ///
    /// Phrases are matched as case-insensitive substrings; they are
    /// lower-cased once here rather than on every message.
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases: phrases.into_iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Returns true if the message contains any sensitive phrase.
    pub fn is_sensitive(&self, message: &str) -> bool {
        if self.phrases.is_empty() {
            return false;
        }
        let lower = message.to_lowercase();
        self.phrases.iter().any(|phrase| lower.contains(phrase))
    }

    /// Returns the number of configured phrases.
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}
