//! Per-user conversation memory.
//!
//! A [`HistoryStore`] keeps a bounded message log for each user so recent
//! context can be fed back to the language model. Logs are bounded two ways,
//! by turn count and by cumulative character total, and trimming always
//! discards the oldest turns first.

use llm::{Message, Role};
use std::collections::HashMap;
use std::sync::Mutex;

/// Retention limits applied to every user's history.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    /// Retained user/assistant pairs; the turn cap is twice this.
    pub max_turn_pairs: usize,
    /// Cap on the summed character count across all retained turns.
    pub max_chars: usize,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_turn_pairs: 6,
            max_chars: 4000,
        }
    }
}

/// Process-wide map from user id to that user's bounded message log.
///
/// All operations lock the whole map, so appends from concurrent requests
/// trim in strict arrival order. Entries live until reset; nothing is
/// persisted.
pub struct HistoryStore {
    bounds: Bounds,
    entries: Mutex<HashMap<String, Vec<Message>>>,
}

impl HistoryStore {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Append one turn to `user_id`'s log, then trim oldest-first until both
    /// bounds hold again.
    ///
    /// The trim loop makes no assumption about user/assistant pairing; a log
    /// holding an odd number of residual turns trims the same way.
    pub fn append(&self, user_id: &str, role: Role, content: impl Into<String>) {
        let mut entries = self.entries.lock().unwrap();
        let log = entries.entry(user_id.to_string()).or_default();
        log.push(Message {
            role,
            content: content.into(),
        });

        let max_turns = self.bounds.max_turn_pairs * 2;
        let mut total: usize = log.iter().map(|m| m.content.chars().count()).sum();
        while total > self.bounds.max_chars || log.len() > max_turns {
            let removed = log.remove(0);
            total -= removed.content.chars().count();
        }
    }

    /// Snapshot of `user_id`'s log, oldest first. Unknown users get an empty
    /// vec. Mutating the snapshot never touches the store.
    pub fn get(&self, user_id: &str) -> Vec<Message> {
        self.entries
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Drop all history for `user_id`. A no-op for users never seen.
    pub fn reset(&self, user_id: &str) {
        self.entries.lock().unwrap().remove(user_id);
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}
