//! LLM Gateway port
//!
//! Defines the interface for the text generation service. The router uses it
//! twice per turn at most: once to classify, once to answer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during generation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway for LLM text generation
///
/// This port defines how the application layer talks to a model.
/// Implementations (adapters) live in the infrastructure layer and own any
/// deadline handling: an expired deadline is reported as
/// [`GatewayError::Timeout`].
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Model identifier, for logs
    fn model(&self) -> &str;

    /// Send a complete prompt and return the generated text
    async fn generate(&self, prompt: &str) -> Result<String, GatewayError>;
}
