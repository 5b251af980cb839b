//! [`LlmGateway`] implementation backed by Gemini.

use super::client::GeminiClient;
use async_trait::async_trait;
use helpdesk_application::{GatewayError, LlmGateway};
use tracing::debug;

/// One model at one fixed temperature.
///
/// The router gets two of these: a low-temperature one for classification
/// and a warmer one for answers.
pub struct GeminiLlmGateway {
    client: GeminiClient,
    model: String,
    temperature: f32,
}

impl GeminiLlmGateway {
    pub fn new(client: GeminiClient, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            client,
            model: model.into(),
            temperature,
        }
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let text = self
            .client
            .generate_content(&self.model, prompt, self.temperature)
            .await?;
        debug!("Gemini returned {} bytes", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn gateway_for(server: &MockServer) -> GeminiLlmGateway {
        let client = GeminiClient::new(&server.uri(), "k", Duration::from_secs(5)).unwrap();
        GeminiLlmGateway::new(client, "gemini-2.0-flash-exp", 0.1)
    }

    #[tokio::test]
    async fn test_generate_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash-exp:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "products\n"}]}}]
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;

        assert_eq!(gateway.model(), "gemini-2.0-flash-exp");
        assert_eq!(gateway.generate("classify").await.unwrap(), "products\n");
    }

    #[tokio::test]
    async fn test_server_error_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let err = gateway.generate("x").await.unwrap_err();

        assert_eq!(
            err,
            GatewayError::RequestFailed("HTTP 503: overloaded".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;

        assert!(matches!(
            gateway.generate("x").await,
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let client =
            GeminiClient::new("http://127.0.0.1:1", "k", Duration::from_secs(2)).unwrap();
        let gateway = GeminiLlmGateway::new(client, "m", 0.3);

        assert!(matches!(
            gateway.generate("x").await,
            Err(GatewayError::ConnectionError(_))
        ));
    }
}
