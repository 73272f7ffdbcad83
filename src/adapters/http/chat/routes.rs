//! Chat route table.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, ChatAppState};

/// Builds the chat router over the given state.
pub fn router(state: ChatAppState) -> Router {
    Router::new()
        .route("/api/chat", post(handlers::post_chat))
        .route("/health", get(handlers::health))
        .with_state(state)
}
