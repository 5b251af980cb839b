//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface with a per-session
//! conversation history.

mod repl;
mod session;

pub use repl::ChatRepl;
pub use session::{ChatSession, ReplCommand};
