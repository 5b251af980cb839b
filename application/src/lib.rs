//! Application layer for helpdesk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{RetrievalFailurePolicy, RouterConfig};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{GatewayError, LlmGateway},
    progress::{NoRouteProgress, RouteProgressNotifier},
    retriever::{RetrievalError, Retriever},
};
pub use use_cases::classify_intent::{Classification, ClassificationSource, IntentClassifier};
pub use use_cases::relevance_gate::RelevanceGate;
pub use use_cases::route_query::{
    Collaborator, DownstreamError, RouteQueryError, RouteQueryInput, RouteQueryUseCase,
};
