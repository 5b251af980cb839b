//! Generic HTTP retrieval service.
//!
//! `POST {base_url}/retrieve` with `{"query": .., "k": ..}`, answered by
//! `{"passages": [{"content": .., "score": ..}]}`.

use crate::http::send_json;
use crate::providers::{ProviderSetupError, validate_base_url};
use async_trait::async_trait;
use helpdesk_application::{RetrievalError, Retriever};
use helpdesk_domain::RetrievedPassage;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Serialize)]
struct RetrieveRequest<'a> {
    query: &'a str,
    k: usize,
}

#[derive(Debug, Deserialize)]
struct RetrieveResponse {
    #[serde(default)]
    passages: Vec<RetrievedPassage>,
}

/// Retriever for any service speaking the `/retrieve` contract.
pub struct HttpRetriever {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRetriever {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ProviderSetupError> {
        let base_url = validate_base_url(base_url)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderSetupError::HttpClient(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}/retrieve", base_url),
        })
    }
}

#[async_trait]
impl Retriever for HttpRetriever {
    async fn retrieve(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, RetrievalError> {
        let response: RetrieveResponse =
            send_json(self.http.post(&self.endpoint).json(&RetrieveRequest { query, k })).await?;
        debug!("Retrieval service returned {} passages", response.passages.len());
        Ok(response.passages)
    }
}
