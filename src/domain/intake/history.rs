//! Conversation history entries.
//!
//! History is an append-only transcript of user/assistant exchanges. Entries
//! are never mutated after creation; the transcript sink receives the full
//! ordered sequence after each processed message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    /// The visitor being walked through the intake script.
    User,
    /// The intake assistant.
    Assistant,
}

impl Speaker {
    /// Returns the label used in exported transcripts.
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Assistant => "assistant",
        }
    }
}

/// One immutable line of the conversation transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Who said it.
    pub speaker: Speaker,
    /// What was said.
    pub text: String,
    /// When it was recorded.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Records an entry for the given speaker at the current moment.
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// Records a user entry.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    /// Records an assistant entry.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Speaker::Assistant, text)
    }
}
