//! Abstractions for interacting with large language model servers.
//!
//! The `llm` crate defines a [`Chatter`] trait along with the concrete
//! [`OllamaClient`] implementation, plus the chat [`Message`] types shared
//! with the rest of the workspace.

pub mod client;
pub mod runner;
pub mod traits;
pub mod types;

pub use client::OllamaClient;
pub use runner::{client_from_env, model_from_env};
pub use traits::{Chatter, LLMError};
pub use types::{Message, Role};
