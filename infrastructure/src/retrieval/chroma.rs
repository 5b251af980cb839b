//! Chroma vector store retriever.
//!
//! The query is embedded with Gemini, then sent to a Chroma server's
//! collection query endpoint. Chroma returns L2 distances; they are turned
//! into relevance scores with `1 - d / √2` so that higher means closer.

use crate::http::{TransportError, send_json};
use crate::providers::gemini::GeminiClient;
use crate::providers::{ProviderSetupError, validate_base_url};
use async_trait::async_trait;
use helpdesk_application::{RetrievalError, Retriever};
use helpdesk_domain::RetrievedPassage;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct Collection {
    id: String,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query_embeddings: Vec<Vec<f32>>,
    n_results: usize,
    include: [&'a str; 2],
}

/// Column-oriented query result, one inner list per query embedding.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    documents: Vec<Vec<Option<String>>>,
    #[serde(default)]
    distances: Vec<Vec<Option<f32>>>,
}

/// Relevance score for an L2 distance.
pub fn l2_relevance(distance: f32) -> f32 {
    1.0 - distance / std::f32::consts::SQRT_2
}

/// Retriever over one Chroma collection.
pub struct ChromaRetriever {
    http: reqwest::Client,
    base_url: String,
    collection: String,
    collection_id: OnceCell<String>,
    embedder: GeminiClient,
    embedding_model: String,
}

impl ChromaRetriever {
    pub fn new(
        base_url: &str,
        collection: impl Into<String>,
        embedder: GeminiClient,
        embedding_model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderSetupError> {
        let base_url = validate_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderSetupError::HttpClient(e.to_string()))?;
        Ok(Self {
            http,
            base_url,
            collection: collection.into(),
            collection_id: OnceCell::new(),
            embedder,
            embedding_model: embedding_model.into(),
        })
    }

    /// Collection id, looked up by name on first use.
    async fn collection_id(&self) -> Result<&str, TransportError> {
        let id = self
            .collection_id
            .get_or_try_init(|| async {
                let url = format!("{}/api/v1/collections/{}", self.base_url, self.collection);
                let collection: Collection = send_json(self.http.get(url)).await?;
                info!(
                    "Resolved Chroma collection '{}' to {}",
                    self.collection, collection.id
                );
                Ok::<_, TransportError>(collection.id)
            })
            .await?;
        Ok(id.as_str())
    }
}

#[async_trait]
impl Retriever for ChromaRetriever {
    async fn retrieve(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, RetrievalError> {
        let embedding = self
            .embedder
            .embed_content(&self.embedding_model, query)
            .await?;
        let collection_id = self.collection_id().await?;

        let request = QueryRequest {
            query_embeddings: vec![embedding],
            n_results: k,
            include: ["documents", "distances"],
        };
        let url = format!(
            "{}/api/v1/collections/{}/query",
            self.base_url, collection_id
        );
        let response: QueryResponse = send_json(self.http.post(url).json(&request)).await?;

        let documents = response.documents.into_iter().next().unwrap_or_default();
        let distances = response.distances.into_iter().next().unwrap_or_default();
        if documents.len() != distances.len() {
            return Err(RetrievalError::InvalidResponse(format!(
                "{} documents but {} distances",
                documents.len(),
                distances.len()
            )));
        }

        let passages: Vec<RetrievedPassage> = documents
            .into_iter()
            .zip(distances)
            .filter_map(|(doc, distance)| Some(RetrievedPassage::new(doc?, l2_relevance(distance?))))
            .collect();
        debug!("Chroma returned {} passages", passages.len());
        Ok(passages)
    }
}
