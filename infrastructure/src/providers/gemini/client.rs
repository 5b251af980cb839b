//! HTTP client for the Gemini REST API.
//!
//! Provides [`GeminiClient`], shared by the generation gateway and the
//! Chroma retriever (which needs Gemini embeddings for its queries).

use super::types::{
    Content, EmbedContentRequest, EmbedContentResponse, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig,
};
use crate::http::{TransportError, send_json};
use crate::providers::{ProviderSetupError, validate_base_url};
use std::time::Duration;
use tracing::debug;

/// Default Gemini API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// HTTP client for Gemini API communication.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Creates a new client; `timeout` applies to every request.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
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
            api_key: api_key.into(),
        })
    }

    /// `models/<name>` path segment, accepting either form.
    fn model_path(model: &str) -> String {
        if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        }
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/v1beta/{}:{}",
            self.base_url,
            Self::model_path(model),
            method
        )
    }

    /// Single-turn text generation. Returns the first candidate's text.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        temperature: f32,
    ) -> Result<String, TransportError> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: GenerationConfig { temperature },
        };
        debug!("generateContent: model={}, {} bytes", model, prompt.len());

        let response: GenerateContentResponse = send_json(
            self.http
                .post(self.endpoint(model, "generateContent"))
                .query(&[("key", &self.api_key)])
                .json(&request),
        )
        .await?;

        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| TransportError::InvalidResponse("No candidates".to_string()))?;

        match candidate.content {
            Some(content) => Ok(content.text()),
            None => Err(TransportError::InvalidResponse(format!(
                "Candidate has no content (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            ))),
        }
    }

    /// Embed `text` with an embedding model.
    pub async fn embed_content(&self, model: &str, text: &str) -> Result<Vec<f32>, TransportError> {
        let request = EmbedContentRequest {
            model: Self::model_path(model),
            content: Content {
                role: None,
                ..Content::user_text(text)
            },
        };

        let response: EmbedContentResponse = send_json(
            self.http
                .post(self.endpoint(model, "embedContent"))
                .query(&[("key", &self.api_key)])
                .json(&request),
        )
        .await?;

        if response.embedding.values.is_empty() {
            return Err(TransportError::InvalidResponse(
                "Empty embedding".to_string(),
            ));
        }
        Ok(response.embedding.values)
    }
}
