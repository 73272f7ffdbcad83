//! AI adapters - implementations of the [`ReplyGenerator`](crate::ports::ReplyGenerator) port.

mod groq_provider;
mod mock_provider;

pub use groq_provider::{GroqConfig, GroqProvider};
pub use mock_provider::{MockOutcome, MockReplyGenerator};
