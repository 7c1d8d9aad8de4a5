//! JSON API for the external chat front-end.
//!
//! Three routes own the session lifecycle: create (returns the welcome
//! text), post a message (runs one counseling turn), and delete (ends the
//! session). A failed turn still answers 200 with the apology reply; the
//! session stays usable.

use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, post};
use axum::{Json, Router};
use rishta_saver_conversation::{WELCOME_MESSAGE, run_turn};
use rishta_saver_core::ConversationSessionId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Builds the API router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}/messages", post(post_message))
        .route("/api/sessions/{id}", delete(end_session))
        .with_state(state)
}

/// Response to session creation.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateSessionResponse {
    /// The new session's id.
    pub session_id: String,
    /// The fixed welcome text.
    pub welcome: String,
}

/// An incoming user message.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostMessageRequest {
    /// The user's raw message.
    pub content: String,
}

/// The reply to one counseling turn.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostMessageResponse {
    /// Turn index within the session.
    pub turn: u32,
    /// Reply text (the apology text when the turn failed).
    pub reply: String,
}

pub(crate) async fn create_session(
    State(state): State<Arc<AppState>>,
) -> Json<CreateSessionResponse> {
    let id = state.sessions.create().await;
    tracing::info!(session = %id, "conversation started");
    Json(CreateSessionResponse {
        session_id: id.to_string(),
        welcome: WELCOME_MESSAGE.to_string(),
    })
}

pub(crate) async fn post_message(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<PostMessageRequest>,
) -> Result<Json<PostMessageResponse>, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    let handle = state
        .sessions
        .get(id)
        .await
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    // Holding the session lock across the turn serializes messages within
    // one session; other sessions proceed independently.
    let mut session = handle.lock().await;
    let report = run_turn(&mut session, state.orchestrator.as_ref(), &request.content).await;

    Ok(Json(PostMessageResponse {
        turn: report.turn,
        reply: report.reply,
    }))
}

pub(crate) async fn end_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    let id = parse_session_id(&id)?;
    state
        .sessions
        .remove(id)
        .await
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;
    tracing::info!(session = %id, "conversation ended");
    Ok(StatusCode::NO_CONTENT)
}

fn parse_session_id(raw: &str) -> Result<ConversationSessionId, (StatusCode, String)> {
    raw.parse()
        .map_err(|_| (StatusCode::NOT_FOUND, format!("session not found: {raw}")))
}
