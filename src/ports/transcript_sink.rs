//! Transcript Sink Port - conversation export.
//!
//! After every processed message the full ordered history is handed to a
//! sink for export (the reference deployment writes one spreadsheet file per
//! user). Overwrite semantics and retry-on-failure policy belong to the
//! sink; export failures never block or fail the conversation.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::intake::HistoryEntry;

/// Errors raised while exporting a transcript.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The export target could not be written.
    #[error("failed to write transcript for user '{user_id}': {source}")]
    Io {
        user_id: String,
        #[source]
        source: std::io::Error,
    },
}

/// Port receiving the full transcript after each processed message.
#[async_trait]
pub trait TranscriptSink: Send + Sync {
    /// Exports the ordered history for the given user.
    ///
    /// Returns the path (or equivalent locator) the transcript was written
    /// to, for logging.
    async fn export(
        &self,
        user_id: &str,
        history: &[HistoryEntry],
    ) -> Result<PathBuf, TranscriptError>;
}
