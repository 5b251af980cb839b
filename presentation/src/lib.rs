//! Presentation layer for helpdesk
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ChatSession, ReplCommand};
pub use cli::commands::{Cli, OutputFormat};
pub use cli::history::{HistoryFileError, load_history_file};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
