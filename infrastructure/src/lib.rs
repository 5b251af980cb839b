//! Infrastructure layer for helpdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
mod http;
pub mod logging;
pub mod providers;
pub mod retrieval;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileGenerationConfig, FileLoggingConfig,
    FileOutputConfig, FileReplConfig, FileRetrievalConfig, FileRouterConfig,
    RetrievalProviderKind, expand_home,
};
pub use http::TransportError;
pub use logging::JsonlConversationLogger;
pub use providers::{
    GenerationGateways, ProviderSetupError, build_generation_gateways,
    gemini::{GeminiClient, GeminiLlmGateway},
};
pub use retrieval::{ChromaRetriever, HttpRetriever, build_retriever};
