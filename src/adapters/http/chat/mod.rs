//! HTTP surface for the chat flow.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, ErrorResponse};
pub use handlers::ChatAppState;
pub use routes::router;
