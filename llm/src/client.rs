//! HTTP client for interacting with an Ollama language model server.
//!
//! This module provides the [`OllamaClient`] type which implements the
//! [`Chatter`] trait by sending the accumulated conversation to the
//! `/api/chat` endpoint of a running Ollama instance.

use crate::traits::{Chatter, LLMError};
use crate::types::{Message, Role};
use async_trait::async_trait;

use ollama_rs::{
    generation::chat::{request::ChatMessageRequest, ChatMessage},
    Ollama,
};

pub struct OllamaClient {
    inner: Ollama,
    model: String,
}

impl OllamaClient {
    pub fn new(base_url: impl AsRef<str>, model: impl Into<String>) -> Result<Self, LLMError> {
        let inner = Ollama::try_new(base_url.as_ref())
            .map_err(|e| LLMError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            inner,
            model: model.into(),
        })
    }

    /// Name of the model completions are requested from.
    pub fn model(&self) -> &str {
        &self.model
    }
}

fn to_chat_message(msg: &Message) -> ChatMessage {
    match msg.role {
        Role::System => ChatMessage::system(msg.content.clone()),
        Role::User => ChatMessage::user(msg.content.clone()),
        Role::Assistant => ChatMessage::assistant(msg.content.clone()),
    }
}

#[async_trait]
impl Chatter for OllamaClient {
    async fn chat(&self, system_prompt: &str, history: &[Message]) -> Result<String, LLMError> {
        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(ChatMessage::system(system_prompt.to_string()));
        messages.extend(history.iter().map(to_chat_message));
        let req = ChatMessageRequest::new(self.model.clone(), messages);
        let res = self
            .inner
            .send_chat_messages(req)
            .await
            .map_err(|e| LLMError::Network(e.to_string()))?;
        Ok(res.message.content.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use warp::Filter;

    #[tokio::test]
    async fn sends_system_prompt_before_history() {
        let seen: Arc<Mutex<Option<serde_json::Value>>> = Arc::new(Mutex::new(None));
        let captured = seen.clone();
        let chat = warp::path!("api" / "chat")
            .and(warp::post())
            .and(warp::body::json())
            .map(move |body: serde_json::Value| {
                *captured.lock().unwrap() = Some(body);
                warp::reply::json(&serde_json::json!({
                    "model": "tiny",
                    "created_at": "2025-01-01T00:00:00Z",
                    "message": {"role": "assistant", "content": " hi there "},
                    "done": true
                }))
            });
        let (addr, server) = warp::serve(chat).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::task::spawn(server);

        let client = OllamaClient::new(format!("http://{addr}"), "tiny").unwrap();
        let history = vec![Message::user("hello"), Message::assistant("yo")];
        let answer = client.chat("be brief", &history).await.unwrap();
        assert_eq!(answer, "hi there");

        let body = seen.lock().unwrap().take().unwrap();
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], "be brief");
        assert_eq!(messages[1]["content"], "hello");
        assert_eq!(messages[2]["role"], "assistant");
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let client = OllamaClient::new("http://127.0.0.1:1", "tiny").unwrap();
        let err = client.chat("sys", &[]).await.unwrap_err();
        assert!(matches!(err, LLMError::Network(_)));
    }
}
