//! Conversation engine.
//!
//! The state machine at the heart of the intake flow: given a session and an
//! incoming message, decides the outbound reply and the next session state.
//!
//! Processing precedence, first match wins:
//! 1. record the inbound message (always, before any branch)
//! 2. sensitive topic → fixed hand-off reply, nothing else moves
//! 3. off-script question (contains '?') → external reply, plus a re-prompt
//!    reminder if a mandatory question is pending
//! 4. pending mandatory answer → accept and advance, or re-prompt
//! 5. script advance → serve the next question
//! 6. completion → fixed closing message, idempotent
//!
//! The engine never fails: external reply failures degrade to a fixed
//! apology string, and exactly one reply is produced per call.

use std::sync::Arc;

use crate::ports::ReplyGenerator;

use super::safety::SensitiveTopicDetector;
use super::script::ScriptCatalog;
use super::session::SessionState;
use super::validator::AnswerValidator;

/// Fixed reply strings the engine emits outside the script.
///
/// All of these are deployment policy, not engine logic, so they are
/// injected rather than hardcoded.
#[derive(Debug, Clone)]
pub struct EngineMessages {
    /// Reply to a sensitive-topic message; points at a human channel.
    pub handoff: String,
    /// Apology used when the external reply generation fails.
    pub fallback: String,
    /// Prefix put before a mandatory question when re-prompting.
    pub reprompt_prefix: String,
    /// Closing message once the script is exhausted.
    pub closing: String,
}

impl Default for EngineMessages {
    fn default() -> Self {
        Self {
            handoff: "That's a topic I'd rather have a person help you with. \
                      Please reach out to our team on the human support channel."
                .to_string(),
            fallback: "Sorry, I had trouble generating an answer just now. \
                       Could you try asking again?"
                .to_string(),
            reprompt_prefix: "Please answer the question: ".to_string(),
            closing: "It was great talking with you! If you'd like to continue, \
                      use the button below to chat with a member of our team."
                .to_string(),
        }
    }
}

/// Decides replies and drives session state for incoming messages.
pub struct ConversationEngine {
    catalog: Arc<ScriptCatalog>,
    validator: AnswerValidator,
    detector: SensitiveTopicDetector,
    messages: EngineMessages,
}

impl ConversationEngine {
    /// Creates an engine over the given script catalog and policies.
    pub fn new(
        catalog: Arc<ScriptCatalog>,
        validator: AnswerValidator,
        detector: SensitiveTopicDetector,
        messages: EngineMessages,
    ) -> Self {
        Self {
            catalog,
            validator,
            detector,
            messages,
        }
    }

    /// Returns the script catalog this engine walks.
    pub fn catalog(&self) -> &ScriptCatalog {
        &self.catalog
    }

    /// Processes one inbound message and returns the single outbound reply.
    ///
    /// All mutation is confined to `session`. The only suspending operation
    /// is the external reply generation for off-script questions.
    pub async fn handle_message(
        &self,
        session: &mut SessionState,
        text: &str,
        generator: &dyn ReplyGenerator,
    ) -> String {
        // Rule 1: the inbound entry is recorded unconditionally, even when a
        // later step fails.
        session.record_user(text);

        // Rule 2: sensitive topics outrank everything, including a pending
        // mandatory question. The script does not move.
        if self.detector.is_sensitive(text) {
            tracing::info!(session_id = %session.id(), "sensitive topic detected, handing off");
            return self.reply(session, self.messages.handoff.clone());
        }

        // Rule 3: a question mark makes this an off-script query, never an
        // answer attempt.
        if text.contains('?') {
            let answer = match generator.generate(text).await {
                Ok(generated) => generated,
                Err(err) => {
                    tracing::warn!(
                        session_id = %session.id(),
                        error = %err,
                        "reply generation failed, using fallback"
                    );
                    self.messages.fallback.clone()
                }
            };
            let full = match session.pending_question() {
                Some(pending) => format!(
                    "{}\n\n{}{}",
                    answer, self.messages.reprompt_prefix, pending.text
                ),
                None => answer,
            };
            return self.reply(session, full);
        }

        // Rule 4: a pending mandatory question consumes the message as an
        // answer attempt.
        if let Some(pending) = session.pending_question() {
            if self.validator.validate(text, pending.answer_type) {
                session.accept_answer(text);
                // Valid: fall through and serve the next item in this call.
            } else {
                let reprompt =
                    format!("{}{}", self.messages.reprompt_prefix, pending.text);
                return self.reply(session, reprompt);
            }
        }

        // Rule 5: walk the script.
        if let Some(question) = self.catalog.get(session.script_index()) {
            let question = question.clone();
            let prompt = question.text.clone();
            session.serve_question(question);
            return self.reply(session, prompt);
        }

        // Rule 6: script exhausted, nothing pending. Terminal and idempotent.
        self.reply(session, self.messages.closing.clone())
    }

    /// Records the outbound reply and returns it.
    fn reply(&self, session: &mut SessionState, text: String) -> String {
        session.record_assistant(&text);
        text
    }
}
