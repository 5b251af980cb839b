//! Retrieval port
//!
//! Defines the interface for the knowledge-base retrieval service. Index
//! construction, chunking and embedding all happen behind it.

use async_trait::async_trait;
use helpdesk_domain::RetrievedPassage;
use thiserror::Error;

/// Errors that can occur during retrieval
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RetrievalError {
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

/// Source of scored knowledge-base passages
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Return up to `k` passages for `query`, most relevant first.
    async fn retrieve(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, RetrievalError>;
}
