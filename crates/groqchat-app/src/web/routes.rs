use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::{info, warn};

use groqchat_chat::{ChatError, ChatReply, ChatService};
use groqchat_types::Turn;

use crate::web::protocol::ChatPayload;

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ChatService>,
}

/// Create router with all routes
pub fn create_router(state: AppState) -> Router {
    // The documented endpoints carry trailing slashes; register both spellings
    // since route matching treats them as distinct paths
    Router::new()
        .route("/", get(describe))
        .route("/chat", post(chat))
        .route("/chat/", post(chat))
        .route("/chat/:session_id", get(history))
        .route("/chat/:session_id/", get(history))
        .with_state(state)
}

/// GET / - Capability description for the backend
async fn describe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Welcome to the groqchat backend!",
        "description": "This API lets users talk to a chatbot powered by the Groq LLM.",
        "endpoints": {
            "POST /chat/": "Send a message and receive a chatbot response.",
            "GET /chat/{session_id}/": "Retrieve chat history for a given session.",
        },
        "status": "Running",
    }))
}

/// POST /chat/ - Dispatch one message and return the reply with full history
async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatPayload>,
) -> Result<Json<ChatReply>, AppError> {
    info!(
        session_id = %payload.session_id,
        bytes = payload.message.len(),
        "chat message received"
    );

    match state.chat.send(&payload.session_id, &payload.message).await {
        Ok(reply) => Ok(Json(reply)),
        Err(err) => {
            warn!(session_id = %payload.session_id, error = %err, "chat request failed");
            Err(err.into())
        }
    }
}

/// GET /chat/:session_id/ - Stored transcript, empty if the session is unknown
async fn history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<Vec<Turn>> {
    info!(session_id = %session_id, "history requested");

    Json(state.chat.history(&session_id).await)
}

/// Error handling
#[derive(Debug)]
pub enum AppError {
    /// The request payload was unusable (422)
    Invalid(String),
    /// The completion dependency failed (500), carrying the upstream text
    Upstream(String),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::EmptyMessage => AppError::Invalid(err.to_string()),
            ChatError::Completion(detail) => AppError::Upstream(detail),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Invalid(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            AppError::Upstream(detail) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("LLM error: {}", detail),
            ),
        };

        let body = Json(serde_json::json!({ "detail": detail }));

        (status, body).into_response()
    }
}
