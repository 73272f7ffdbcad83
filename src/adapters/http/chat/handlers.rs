//! Chat endpoint handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::application::ProcessMessageHandler;

use super::dto::{ChatRequest, ChatResponse, ErrorResponse};

/// Shared state for the chat routes.
#[derive(Clone)]
pub struct ChatAppState {
    pub handler: Arc<ProcessMessageHandler>,
}

/// `POST /api/chat` - processes one message and returns the reply.
pub async fn post_chat(
    State(state): State<ChatAppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    if request.user_id.trim().is_empty() {
        return Err(bad_request("userId must not be empty"));
    }

    match state
        .handler
        .process(&request.user_id, &request.message)
        .await
    {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(err) => {
            tracing::error!(user_id = %request.user_id, error = %err, "chat turn failed");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal error".to_string(),
                }),
            ))
        }
    }
}

/// `GET /health` - liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}
