//! Conversational capability the skill delegates the game to.
//!
//! A [`ChatBackend`] opens sessions; a [`ChatSession`] carries the history of
//! one game and answers each message given the full exchange so far.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::ChatError;

/// Shared reference to one ongoing remote conversation.
pub type SessionHandle = Arc<dyn ChatSession>;

#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Unique identity of this handle.
    fn id(&self) -> Uuid;

    /// Send the next user turn and return the model's reply text.
    async fn send(&self, text: &str) -> Result<String, ChatError>;
}

#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn create_session(&self, credential: &str, model: &str)
    -> Result<SessionHandle, ChatError>;
}
