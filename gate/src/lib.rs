//! Prompt screening applied before anything else touches user input.
//!
//! A [`Gate`] rejects prompts that are too long or that match one of its
//! disallowed patterns. The pattern list is configuration, so operators can
//! extend it without touching this crate.

use regex::Regex;

/// Longest prompt accepted by [`Gate::default`].
pub const DEFAULT_MAX_PROMPT_LEN: usize = 2000;

pub struct Gate {
    max_prompt_len: usize,
    disallowed: Vec<Regex>,
}

impl Gate {
    pub fn new(max_prompt_len: usize, disallowed: Vec<Regex>) -> Self {
        Self {
            max_prompt_len,
            disallowed,
        }
    }

    /// The stock pattern list: block anything carrying an http(s) link.
    pub fn default_patterns() -> Vec<Regex> {
        vec![Regex::new(r"(?i)https?://").unwrap()]
    }

    /// Whether `text` may be forwarded downstream.
    ///
    /// Pure and total: same input, same answer, nothing mutated.
    pub fn is_acceptable(&self, text: &str) -> bool {
        if text.chars().count() > self.max_prompt_len {
            return false;
        }
        !self.disallowed.iter().any(|rx| rx.is_match(text))
    }
}

impl Default for Gate {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_PROMPT_LEN, Self::default_patterns())
    }
}
