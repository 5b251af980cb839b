//! Retrieval adapters and their construction from configuration.

mod chroma;
mod http;

pub use chroma::{ChromaRetriever, l2_relevance};
pub use http::HttpRetriever;

use crate::config::{FileGenerationConfig, FileRetrievalConfig, RetrievalProviderKind};
use crate::providers::{ProviderSetupError, gemini_client};
use helpdesk_application::Retriever;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Build the retriever named by `[retrieval] provider`.
///
/// Chroma needs the generation credentials for query embeddings.
pub fn build_retriever(
    retrieval: &FileRetrievalConfig,
    generation: &FileGenerationConfig,
) -> Result<Arc<dyn Retriever>, ProviderSetupError> {
    let kind = retrieval
        .provider
        .parse::<RetrievalProviderKind>()
        .map_err(|_| ProviderSetupError::UnknownProvider {
            kind: "retrieval",
            name: retrieval.provider.clone(),
        })?;
    let timeout = Duration::from_secs(retrieval.timeout_seconds);
    info!("Retrieval: {} at {}", kind, retrieval.base_url);

    Ok(match kind {
        RetrievalProviderKind::Chroma => Arc::new(ChromaRetriever::new(
            &retrieval.base_url,
            retrieval.collection.clone(),
            gemini_client(generation)?,
            retrieval.embedding_model.clone(),
            timeout,
        )?),
        RetrievalProviderKind::Http => {
            Arc::new(HttpRetriever::new(&retrieval.base_url, timeout)?)
        }
    })
}
