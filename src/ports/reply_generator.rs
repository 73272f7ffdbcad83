//! Reply Generator Port - interface for the external language-model call.
//!
//! Off-script visitor questions are answered by an external LLM service.
//! The engine only sees this single capability: text in, text out, or a
//! [`ReplyError`] it maps to a fixed apology string. Retry policy belongs to
//! the adapter, never to the engine.

use async_trait::async_trait;

/// Port for generating a free-form reply to an off-script question.
#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// Generates a reply to the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, ReplyError>;
}

/// Failures of the external reply-generation service.
#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// The provider rejected the request payload.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },
}

impl ReplyError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a retry could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ReplyError::RateLimited { .. }
                | ReplyError::Unavailable { .. }
                | ReplyError::Network(_)
                | ReplyError::Timeout { .. }
        )
    }
}
