use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use groqchat_types::{Role, Turn};

pub mod groq;

/// Role name understood by OpenAI-compatible completion APIs
pub fn wire_role(role: Role) -> &'static str {
    match role {
        Role::Human => "user",
        Role::Assistant => "assistant",
    }
}

/// Chat message structure (OpenAI-compatible format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionMessage {
    pub role: String,
    pub content: String,
}

impl From<&Turn> for ChatCompletionMessage {
    fn from(turn: &Turn) -> Self {
        Self {
            role: wire_role(turn.role).to_string(),
            content: turn.content.clone(),
        }
    }
}

/// Chat completion request structure
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f64,
    pub messages: Vec<ChatCompletionMessage>,
}

/// Chat completion response structure
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

/// Choice structure within a chat completion response
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatCompletionMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Completion client trait - the capability the chat dispatcher depends on
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send an ordered window of turns and return the assistant reply text
    async fn complete(&self, turns: &[Turn]) -> Result<String>;
}
