//! Session Store Port - per-user session persistence.
//!
//! The core owns the session schema; where sessions live (in-memory map,
//! external cache, database) is an adapter decision. Sessions are created on
//! first contact and never deleted by the core.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::intake::SessionState;

/// Errors raised by session storage backends.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// The backend could not be reached or refused the operation.
    #[error("session storage failed: {0}")]
    Storage(String),
}

impl SessionStoreError {
    /// Creates a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

/// Port mapping user identifiers to session state.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for the given user, creating a fresh one on
    /// first contact.
    async fn get_or_create(&self, user_id: &str) -> Result<SessionState, SessionStoreError>;

    /// Persists the updated session for the given user.
    async fn save(&self, user_id: &str, session: SessionState) -> Result<(), SessionStoreError>;
}
