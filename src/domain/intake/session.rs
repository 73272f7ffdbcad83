//! Per-user session state.
//!
//! One session exists per user identifier, created on first contact and
//! mutated in place by the engine. The core never deletes sessions; eviction
//! and durability are host concerns.
//!
//! # Invariants
//!
//! - `script_index` is monotonically non-decreasing
//! - `collected_answers.len() <= script_index`
//! - `pending_question`, when set, is the mandatory question dequeued at
//!   `script_index - 1` whose answer has not yet validated
//! - `history` is append-only

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::history::{HistoryEntry, Speaker};
use super::phase::SessionPhase;
use super::question::QuestionDefinition;

/// Conversation state for a single user identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Internal session identifier, used in tracing spans.
    id: Uuid,

    /// Next unread position in the script catalog.
    script_index: usize,

    /// Accepted answers, in script order.
    collected_answers: Vec<String>,

    /// Full conversation transcript.
    history: Vec<HistoryEntry>,

    /// The mandatory question currently awaiting a valid answer.
    pending_question: Option<QuestionDefinition>,
}

impl SessionState {
    /// Creates a fresh session, before any message has been processed.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            script_index: 0,
            collected_answers: Vec::new(),
            history: Vec::new(),
            pending_question: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the session identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the next unread script position.
    pub fn script_index(&self) -> usize {
        self.script_index
    }

    /// Returns the accepted answers in script order.
    pub fn collected_answers(&self) -> &[String] {
        &self.collected_answers
    }

    /// Returns the full transcript.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the mandatory question awaiting a valid answer, if any.
    pub fn pending_question(&self) -> Option<&QuestionDefinition> {
        self.pending_question.as_ref()
    }

    /// Derives the lifecycle phase from the session against the catalog size.
    pub fn phase(&self, catalog_len: usize) -> SessionPhase {
        if self.pending_question.is_some() {
            SessionPhase::AwaitingMandatoryAnswer
        } else if self.script_index == 0 {
            // Nothing served yet. Hand-off and off-script replies may already
            // sit in the history without having started the script.
            SessionPhase::AwaitingFirstMessage
        } else if self.script_index >= catalog_len {
            SessionPhase::Completed
        } else {
            SessionPhase::InScript
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Mutations (engine-only surface)
    // ─────────────────────────────────────────────────────────────────────

    /// Appends a user utterance to the transcript.
    pub fn record_user(&mut self, text: impl Into<String>) {
        self.history.push(HistoryEntry::new(Speaker::User, text));
    }

    /// Appends an assistant utterance to the transcript.
    pub fn record_assistant(&mut self, text: impl Into<String>) {
        self.history.push(HistoryEntry::new(Speaker::Assistant, text));
    }

    /// Dequeues the given question: advances the script cursor and, for
    /// mandatory questions, marks it as pending.
    pub fn serve_question(&mut self, question: QuestionDefinition) {
        self.script_index += 1;
        if question.mandatory {
            self.pending_question = Some(question);
        }
    }

    /// Accepts an answer for the pending mandatory question.
    pub fn accept_answer(&mut self, answer: impl Into<String>) {
        self.collected_answers.push(answer.into());
        self.pending_question = None;
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
