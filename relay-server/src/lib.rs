//! HTTP surface translating slash-command interactions into relay calls.
//!
//! The platform delivers one JSON payload per slash command to
//! `POST /interactions`. Dispatch runs the input gate first, then reads the
//! user's stored history, asks the [`Chatter`] for a completion, and only on
//! success records the new turns.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use gate::Gate;
use llm::{Chatter, Message, Role};
use memory::HistoryStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Primer prepended to every completion request. Never stored in any user's
/// history, so trimming cannot evict it.
pub const SYSTEM_PROMPT: &str = "You are a helpful, concise assistant chatting on Discord.";

pub const RESET_REPLY: &str = "🗑️ Conversation reset.";
pub const REJECTED_REPLY: &str = "⚠️ That prompt is not allowed or is too long.";
pub const PROVIDER_ERROR_REPLY: &str = "❌ I had trouble reaching the AI service. Try again.";
pub const EMPTY_COMPLETION_REPLY: &str = "I couldn't generate a response.";

/// Shared handles given to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<HistoryStore>,
    pub gate: Arc<Gate>,
    pub chatter: Arc<dyn Chatter>,
}

/// One slash command as delivered by the platform.
#[derive(Debug, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum Interaction {
    Chat { user_id: String, prompt: String },
    Reset { user_id: String },
}

/// Body handed back to the platform for display.
#[derive(Debug, Serialize, Deserialize)]
pub struct InteractionReply {
    pub content: String,
    pub ephemeral: bool,
}

impl InteractionReply {
    fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }

    fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }
}

pub async fn interactions(
    State(state): State<AppState>,
    Json(interaction): Json<Interaction>,
) -> Json<InteractionReply> {
    match interaction {
        Interaction::Reset { user_id } => {
            state.store.reset(&user_id);
            info!(%user_id, "conversation reset");
            Json(InteractionReply::ephemeral(RESET_REPLY))
        }
        Interaction::Chat { user_id, prompt } => Json(chat(&state, &user_id, prompt).await),
    }
}

/// Run one `chat` command: gate, gather context, complete, remember.
async fn chat(state: &AppState, user_id: &str, prompt: String) -> InteractionReply {
    if !state.gate.is_acceptable(&prompt) {
        debug!(%user_id, "prompt rejected");
        return InteractionReply::public(REJECTED_REPLY);
    }

    let mut context = state.store.get(user_id);
    context.push(Message::user(prompt.clone()));

    let answer = match state.chatter.chat(SYSTEM_PROMPT, &context).await {
        Ok(answer) => answer,
        Err(err) => {
            error!(%user_id, error = %err, "completion failed");
            return InteractionReply::public(PROVIDER_ERROR_REPLY);
        }
    };
    let answer = if answer.is_empty() {
        EMPTY_COMPLETION_REPLY.to_string()
    } else {
        answer
    };

    state.store.append(user_id, Role::User, prompt);
    state.store.append(user_id, Role::Assistant, answer.clone());
    debug!(%user_id, chars = answer.chars().count(), "answered");
    InteractionReply::public(answer)
}

async fn healthz() -> &'static str {
    "ok"
}

/// Build the application router with the provided state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/interactions", post(interactions))
        .route("/healthz", get(healthz))
        .with_state(state)
}
