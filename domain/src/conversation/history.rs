//! Conversation history and its prompt rendering.
//!
//! History is owned by the caller. The router only ever reads the most recent
//! [`HISTORY_WINDOW`] entries and never mutates the caller's sequence.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of prior entries folded into a prompt.
pub const HISTORY_WINDOW: usize = 4;

/// Who produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The customer
    User,
    /// The assistant. Serialized as `"bot"` to match the chat API.
    #[serde(rename = "bot", alias = "system")]
    System,
}

impl Speaker {
    /// Label used when rendering the entry into a prompt
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "User",
            Speaker::System => "Bot",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::System => write!(f, "bot"),
        }
    }
}

impl std::str::FromStr for Speaker {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Speaker::User),
            "bot" | "system" | "assistant" => Ok(Speaker::System),
            _ => Err(DomainError::InvalidSpeaker(s.to_string())),
        }
    }
}

/// One prior message in the conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "sender", alias = "speaker")]
    pub speaker: Speaker,
    pub text: String,
}

impl HistoryEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Speaker::User, text)
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(Speaker::System, text)
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.speaker.label(), self.text)
    }
}

/// The slice of `history` that a prompt may see: the last `window` entries.
pub fn recent_window(history: &[HistoryEntry], window: usize) -> &[HistoryEntry] {
    let start = history.len().saturating_sub(window);
    &history[start..]
}

/// Render the last `window` entries as `"<Speaker>: <text>"` lines.
///
/// Entry text is passed through untouched. An empty history (or a zero
/// window) renders as an empty string.
pub fn format_history(history: &[HistoryEntry], window: usize) -> String {
    recent_window(history, window)
        .iter()
        .map(|entry| entry.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
