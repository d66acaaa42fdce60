//! # groqchat-llm-api
//!
//! The completion client surface for groqchat:
//! - **`CompletionClient`**: the trait the chat dispatcher depends on
//! - **`GroqClient`**: an implementation speaking the OpenAI-compatible chat API
//! - request/response wire structures and endpoint configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use groqchat_llm_api::config::{DEFAULT_MODEL, DEFAULT_TEMPERATURE, GROQ_API_URL};
//! use groqchat_llm_api::{CompletionClient, GroqClient};
//! use groqchat_types::Turn;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = GroqClient::new(
//!         "your-api-key".to_string(),
//!         DEFAULT_MODEL.to_string(),
//!         GROQ_API_URL.to_string(),
//!         DEFAULT_TEMPERATURE,
//!     );
//!
//!     let reply = client.complete(&[Turn::human("Hello!")]).await?;
//!     println!("{}", reply);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;

// Re-export commonly used types
pub use client::groq::GroqClient;
pub use client::{
    wire_role, ChatCompletionMessage, ChatRequest, ChatResponse, Choice, CompletionClient,
};
pub use config::{api_key_from_env, normalize_api_url, GROQ_API_URL};
