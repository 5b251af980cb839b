//! Domain layer for helpdesk
//!
//! This crate contains the routing decisions and the types they work on.
//! It performs no I/O and has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Category**: the single intent label assigned to a turn
//! - **Escalation keywords**: a deterministic pre-filter that sends
//!   liability-prone queries straight to a human
//! - **Relevance verdict**: whether retrieved context is good enough to answer from
//! - **Route state**: the `Classifying → {Escalating, Retrieving} → Responding → Done`
//!   state machine, one type per state

pub mod config;
pub mod conversation;
pub mod core;
pub mod prompt;
pub mod retrieval;
pub mod routing;
pub mod util;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use conversation::history::{
    HISTORY_WINDOW, HistoryEntry, Speaker, format_history, recent_window,
};
pub use core::{error::DomainError, query::Query};
pub use prompt::{ESCALATION_MESSAGE, PromptTemplate, WEAK_CONTEXT_MESSAGE};
pub use retrieval::{
    passage::RetrievedPassage,
    relevance::{DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_TOP_K, RelevanceVerdict},
};
pub use routing::{
    category::Category,
    keywords::{DEFAULT_ESCALATION_KEYWORDS, EscalationKeywords},
    result::{RouteOutcome, RoutingResult},
    state::{Classifying, Escalating, Responding, Retrieving, RouteStage, RouteState, WorkflowState},
};
