//! Conversation management for groqchat
//!
//! This crate holds the in-memory session store and the chat service that
//! bridges stored histories to a completion client.

pub mod error;
pub mod service;
pub mod session;

pub use error::ChatError;
pub use service::{ChatReply, ChatService};
pub use session::SessionStore;
