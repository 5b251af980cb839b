//! Conversation domain.
//!
//! - [`history::HistoryEntry`]: one prior message, tagged with its [`history::Speaker`]
//! - [`history::format_history`]: bounded rendering of recent turns for prompts

pub mod history;
