use anyhow::Result;
use async_trait::async_trait;

use groqchat_types::Turn;

use crate::client::{ChatCompletionMessage, ChatRequest, ChatResponse, CompletionClient};

/// Groq completion client speaking the OpenAI-compatible chat API
pub struct GroqClient {
    api_key: String,
    model: String,
    api_url: String,
    temperature: f64,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(api_key: String, model: String, api_url: String, temperature: f64) -> Self {
        Self {
            api_key,
            model,
            api_url,
            temperature,
            client: reqwest::Client::new(),
        }
    }

    fn build_request(&self, turns: &[Turn]) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: turns.iter().map(ChatCompletionMessage::from).collect(),
        }
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    async fn complete(&self, turns: &[Turn]) -> Result<String> {
        let request = self.build_request(turns);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("API request failed: {} - {}", status, error_text));
        }

        let response_text = response.text().await?;
        let chat_response: ChatResponse = serde_json::from_str(&response_text)?;

        match chat_response.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content),
            None => Err(anyhow::anyhow!("No completion choices in response")),
        }
    }
}
