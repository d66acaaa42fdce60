use std::sync::Arc;

use serde::Serialize;

use groqchat_llm_api::CompletionClient;
use groqchat_types::{Turn, CONTEXT_WINDOW_TURNS};

use crate::error::ChatError;
use crate::session::SessionStore;

/// Latest assistant response plus the full transcript for the session
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub history: Vec<Turn>,
}

/// Chat service bridging the session store and the completion client
pub struct ChatService {
    store: Arc<SessionStore>,
    client: Arc<dyn CompletionClient>,
}

impl ChatService {
    pub fn new(store: Arc<SessionStore>, client: Arc<dyn CompletionClient>) -> Self {
        Self { store, client }
    }

    /// Handle one chat message for a session.
    ///
    /// Appends the human turn, forwards the trailing `CONTEXT_WINDOW_TURNS`
    /// turns to the completion client, appends the assistant turn, and
    /// returns the reply together with the full history. If the completion
    /// call fails the already-appended human turn stays in the store.
    pub async fn send(&self, session_id: &str, message: &str) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let history = self.store.append(session_id, Turn::human(message)).await;

        let window_start = history.len().saturating_sub(CONTEXT_WINDOW_TURNS);
        let context = &history[window_start..];

        let response = self
            .client
            .complete(context)
            .await
            .map_err(|err| ChatError::Completion(format!("{:#}", err)))?;

        let history = self
            .store
            .append(session_id, Turn::assistant(response.clone()))
            .await;

        Ok(ChatReply { response, history })
    }

    /// Stored transcript for a session id, empty if the id is unknown
    pub async fn history(&self, session_id: &str) -> Vec<Turn> {
        self.store.history(session_id).await
    }
}
