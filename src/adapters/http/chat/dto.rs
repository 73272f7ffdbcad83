//! Wire types for the chat endpoint.

use serde::{Deserialize, Serialize};

/// Inbound chat message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Stable identifier of the visitor (phone number, device id, ...).
    pub user_id: String,
    /// The message text.
    pub message: String,
}

/// Outbound reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body returned on failures.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
