//! Intake domain - the scripted conversation core.
//!
//! Everything here is deterministic and side-effect free except
//! [`ConversationEngine::handle_message`], whose only suspension point is
//! the external reply generation for off-script questions.

mod engine;
mod history;
mod phase;
mod question;
mod safety;
mod script;
mod session;
mod validator;

pub use engine::{ConversationEngine, EngineMessages};
pub use history::{HistoryEntry, Speaker};
pub use phase::SessionPhase;
pub use question::{AnswerType, QuestionDefinition};
pub use safety::SensitiveTopicDetector;
pub use script::{CatalogError, ScriptCatalog};
pub use session::SessionState;
pub use validator::{AnswerValidator, ValidationRules};
