//! CSV Transcript Sink - one transcript file per user.
//!
//! Writes the full ordered history to `<dir>/<user_id>.csv` after each
//! processed message, overwriting any previous export so the file always
//! reflects the complete conversation. Writes are retried a bounded number
//! of times because the reference deployment's export target is routinely
//! held open by a spreadsheet viewer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::fs;
use tokio::time::sleep;

use crate::domain::intake::HistoryEntry;
use crate::ports::{TranscriptError, TranscriptSink};

const WRITE_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(200);

/// File-based implementation of [`TranscriptSink`].
pub struct CsvTranscriptSink {
    output_dir: PathBuf,
}

impl CsvTranscriptSink {
    /// Creates a sink writing under the given directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    fn target_path(&self, user_id: &str) -> PathBuf {
        self.output_dir.join(format!("{}.csv", sanitize(user_id)))
    }

    fn render(history: &[HistoryEntry]) -> String {
        let mut out = String::from("timestamp,speaker,text\n");
        for entry in history {
            out.push_str(&entry.timestamp.to_rfc3339());
            out.push(',');
            out.push_str(entry.speaker.label());
            out.push(',');
            out.push_str(&quote(&entry.text));
            out.push('\n');
        }
        out
    }

    async fn write_with_retry(&self, path: &Path, contents: &str) -> std::io::Result<()> {
        let mut attempt = 0;
        loop {
            match fs::write(path, contents).await {
                Ok(()) => return Ok(()),
                Err(err) if attempt + 1 < WRITE_ATTEMPTS => {
                    tracing::warn!(
                        path = %path.display(),
                        attempt,
                        error = %err,
                        "transcript write failed, retrying"
                    );
                    sleep(RETRY_DELAY).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[async_trait]
impl TranscriptSink for CsvTranscriptSink {
    async fn export(
        &self,
        user_id: &str,
        history: &[HistoryEntry],
    ) -> Result<PathBuf, TranscriptError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| TranscriptError::Io {
                user_id: user_id.to_string(),
                source,
            })?;

        let path = self.target_path(user_id);
        let contents = Self::render(history);

        self.write_with_retry(&path, &contents)
            .await
            .map_err(|source| TranscriptError::Io {
                user_id: user_id.to_string(),
                source,
            })?;

        Ok(path)
    }
}

/// Keeps user identifiers filesystem-safe.
fn sanitize(user_id: &str) -> String {
    user_id
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// RFC 4180 field quoting.
fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
