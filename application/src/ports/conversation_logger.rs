//! Port for structured conversation logging.
//!
//! Records the routing decisions of each turn (classification, relevance
//! verdict, final result) as machine-readable events. Human-readable
//! diagnostics go through `tracing`; this port is the audit transcript.

use serde_json::Value;

/// A structured routing event.
pub struct ConversationEvent {
    /// Event type identifier (`"classification"`, `"relevance"`, `"route_result"`).
    pub event_type: &'static str,
    /// JSON payload with event-specific fields.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for routing events.
///
/// `log` is synchronous and infallible: a broken log sink must never change
/// the outcome of a turn.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
