//! Request handlers for the dashboard API.

mod chat;
mod datasets;

pub mod request;
pub mod response;

use axum::Json;
use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Builds the API router with all routes attached.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat::send_chat_message))
        .route(
            "/api/chat/{session_id}/messages",
            get(chat::get_chat_messages).delete(chat::clear_chat_messages),
        )
        .route("/api/datasets/preview", post(datasets::preview_dataset))
        .route("/api/datasets/ingest", post(datasets::ingest_dataset))
        .with_state(state)
}

/// Liveness probe.
async fn health() -> Json<response::Health> {
    Json(response::Health::ok())
}
