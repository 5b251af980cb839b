//! In-memory conversation for one chat session.

use helpdesk_domain::{HistoryEntry, Query, RoutingResult};

/// Turns exchanged so far, oldest first.
///
/// Lives only as long as the REPL; nothing is persisted.
#[derive(Debug, Default, Clone)]
pub struct ChatSession {
    history: Vec<HistoryEntry>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Append a completed turn: the user's query, then the response.
    pub fn record_turn(&mut self, query: &Query, result: &RoutingResult) {
        self.history.push(HistoryEntry::user(query.content()));
        self.history
            .push(HistoryEntry::system(result.response_text()));
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Number of completed turns.
    pub fn turns(&self) -> usize {
        self.history.len() / 2
    }
}

/// REPL slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    History,
    Clear,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line starting with `/`. Returns `None` for anything else.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with('/') {
            return None;
        }
        Some(match line {
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/history" => ReplCommand::History,
            "/clear" => ReplCommand::Clear,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            other => ReplCommand::Unknown(other.to_string()),
        })
    }
}
