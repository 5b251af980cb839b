//! Prompt templates and fixed response messages.

pub mod template;

pub use template::{ESCALATION_MESSAGE, PromptTemplate, WEAK_CONTEXT_MESSAGE};
