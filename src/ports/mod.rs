//! Ports - interfaces between the intake core and its collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports; the domain
//! and application layers depend only on the trait surface.

mod reply_generator;
mod session_store;
mod transcript_sink;

pub use reply_generator::{ReplyError, ReplyGenerator};
pub use session_store::{SessionStore, SessionStoreError};
pub use transcript_sink::{TranscriptError, TranscriptSink};
