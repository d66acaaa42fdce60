use thiserror::Error;

/// Failure kinds surfaced by the chat service
#[derive(Debug, Error)]
pub enum ChatError {
    /// The message was blank after trimming; nothing was stored.
    #[error("Message content cannot be empty")]
    EmptyMessage,

    /// The completion service call failed; carries the upstream error text.
    #[error("completion request failed: {0}")]
    Completion(String),
}
