//! Session lifecycle phases.
//!
//! The intake flow is a four-state machine. The sensitive-topic and
//! off-script-question rules are overlays usable from any phase and do not
//! themselves transition it.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of an intake session.
///
/// - `AwaitingFirstMessage`: session exists but nothing has been served yet
/// - `InScript`: walking the script, no mandatory answer outstanding
/// - `AwaitingMandatoryAnswer`: a mandatory question blocks advancement
/// - `Completed`: script exhausted; terminal and idempotent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    AwaitingFirstMessage,
    InScript,
    AwaitingMandatoryAnswer,
    Completed,
}

impl SessionPhase {
    /// Returns true if a transition from self to target is valid.
    ///
    /// The invalid-answer self-loop on `AwaitingMandatoryAnswer` is modeled
    /// explicitly since the engine re-prompts without leaving the phase.
    pub fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            // First message starts the script walk
            (AwaitingFirstMessage, InScript) |
            // A short all-optional script can finish on the first message
            (AwaitingFirstMessage, Completed) |
            // A mandatory question was served
            (InScript, AwaitingMandatoryAnswer) |
            // Valid answer resumes the walk
            (AwaitingMandatoryAnswer, InScript) |
            // Invalid answer re-prompts in place
            (AwaitingMandatoryAnswer, AwaitingMandatoryAnswer) |
            // Last answer accepted with nothing left to serve
            (AwaitingMandatoryAnswer, Completed) |
            // Script exhausted
            (InScript, Completed)
        )
    }

    /// Returns all valid target phases from the current phase.
    pub fn valid_transitions(&self) -> Vec<Self> {
        use SessionPhase::*;
        match self {
            AwaitingFirstMessage => vec![InScript, Completed],
            InScript => vec![AwaitingMandatoryAnswer, Completed],
            AwaitingMandatoryAnswer => {
                vec![InScript, AwaitingMandatoryAnswer, Completed]
            }
            Completed => vec![],
        }
    }

    /// Returns true if this phase has no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
