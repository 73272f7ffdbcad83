//! In-Memory Session Store - process-local session persistence.
//!
//! Backs the [`SessionStore`] port with a `HashMap` behind an async
//! `RwLock`. Sessions live for the lifetime of the process; the reference
//! deployment runs a single instance, so this is the production store, not
//! just a test double.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::intake::SessionState;
use crate::ports::{SessionStore, SessionStoreError};

/// Process-local implementation of [`SessionStore`].
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, SessionState>>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of sessions currently held.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, user_id: &str) -> Result<SessionState, SessionStoreError> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(user_id) {
                return Ok(session.clone());
            }
        }

        let mut sessions = self.sessions.write().await;
        // Re-check under the write lock: another task may have created the
        // session between the locks.
        let session = sessions
            .entry(user_id.to_string())
            .or_insert_with(SessionState::new);
        Ok(session.clone())
    }

    async fn save(&self, user_id: &str, session: SessionState) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(user_id.to_string(), session);
        Ok(())
    }
}
