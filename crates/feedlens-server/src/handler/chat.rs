//! Chat relay handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use feedlens_core::types::ChatMessage;
use uuid::Uuid;

use crate::Result;
use crate::handler::request::SendChatMessage;
use crate::handler::response::{ChatReply, SessionMessages};
use crate::state::AppState;

/// Tracing target for chat operations.
const TRACING_TARGET: &str = "feedlens_server::handler::chat";

/// Relays a user message to the conversational flow.
///
/// The user message is appended to the session before the relay call, so
/// a failed call keeps the user turn in the history; the error renders
/// inline and the user may re-trigger manually.
#[tracing::instrument(skip_all)]
pub(super) async fn send_chat_message(
    State(state): State<AppState>,
    Json(request): Json<SendChatMessage>,
) -> Result<Json<ChatReply>> {
    if request.message.is_empty() {
        return Err(feedlens_core::Error::validation("message must not be empty").into());
    }

    let relay = state.relay()?;
    let session_id = request.session_id.unwrap_or_else(Uuid::now_v7);

    tracing::debug!(
        target: TRACING_TARGET,
        session_id = %session_id,
        "Relaying chat message"
    );

    state
        .sessions()
        .append(session_id, ChatMessage::user(&request.message))
        .await;

    let reply = relay.send(&request.message).await?;

    state
        .sessions()
        .append(session_id, ChatMessage::assistant(&reply.text))
        .await;

    tracing::info!(
        target: TRACING_TARGET,
        session_id = %session_id,
        "Chat exchange completed"
    );

    Ok(Json(ChatReply {
        session_id,
        reply: reply.text,
        raw: request.include_raw.then_some(reply.raw),
    }))
}

/// Returns a session's conversation history.
#[tracing::instrument(skip_all, fields(session_id = %session_id))]
pub(super) async fn get_chat_messages(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionMessages>> {
    let messages = state.sessions().messages(session_id).await;

    Ok(Json(SessionMessages {
        session_id,
        messages,
    }))
}

/// Clears a session's conversation history.
///
/// This is the only way session state goes away; histories are never
/// expired on a timer.
#[tracing::instrument(skip_all, fields(session_id = %session_id))]
pub(super) async fn clear_chat_messages(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> StatusCode {
    let existed = state.sessions().clear(session_id).await;

    tracing::debug!(
        target: TRACING_TARGET,
        session_id = %session_id,
        existed,
        "Chat history cleared"
    );

    StatusCode::NO_CONTENT
}
