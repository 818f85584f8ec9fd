use crate::types::Message;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid base url: {0}")]
    InvalidUrl(String),
    #[error("invalid response")]
    InvalidResponse,
}

/// Produces a completion for a system prompt plus prior conversation turns.
///
/// The history slice is oldest first; the final entry is the message being
/// answered.
#[async_trait]
pub trait Chatter: Send + Sync {
    async fn chat(&self, system_prompt: &str, history: &[Message]) -> Result<String, LLMError>;
}
