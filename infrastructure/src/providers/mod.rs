//! Generation providers and their construction from configuration.

pub mod gemini;

use crate::config::FileGenerationConfig;
use gemini::{GeminiClient, GeminiLlmGateway};
use helpdesk_application::LlmGateway;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors raised while wiring adapters at startup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderSetupError {
    #[error("missing API key: set the {env_var} environment variable or generation.api_key")]
    MissingApiKey { env_var: String },

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unknown {kind} provider '{name}'")]
    UnknownProvider { kind: &'static str, name: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Check that `url` is an absolute http(s) URL and drop any trailing slash.
pub(crate) fn validate_base_url(url: &str) -> Result<String, ProviderSetupError> {
    let invalid = |reason: String| ProviderSetupError::InvalidBaseUrl {
        url: url.to_string(),
        reason,
    };
    let parsed = reqwest::Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    Ok(url.trim_end_matches('/').to_string())
}

/// The two generation handles the router needs.
pub struct GenerationGateways {
    pub classifier: Arc<dyn LlmGateway>,
    pub answer: Arc<dyn LlmGateway>,
}

/// Build a Gemini client from the `[generation]` section.
pub fn gemini_client(config: &FileGenerationConfig) -> Result<GeminiClient, ProviderSetupError> {
    if !config.provider.eq_ignore_ascii_case("gemini") {
        return Err(ProviderSetupError::UnknownProvider {
            kind: "generation",
            name: config.provider.clone(),
        });
    }
    let api_key = config
        .resolve_api_key()
        .ok_or_else(|| ProviderSetupError::MissingApiKey {
            env_var: config.api_key_env.clone(),
        })?;
    GeminiClient::new(
        &config.base_url,
        api_key,
        Duration::from_secs(config.timeout_seconds),
    )
}

/// Build the classification and answer gateways.
///
/// Both share one HTTP client and differ only in temperature.
pub fn build_generation_gateways(
    config: &FileGenerationConfig,
) -> Result<GenerationGateways, ProviderSetupError> {
    let client = gemini_client(config)?;
    info!(
        "Generation: {} (classify t={}, answer t={})",
        config.model, config.classification_temperature, config.answer_temperature
    );

    Ok(GenerationGateways {
        classifier: Arc::new(GeminiLlmGateway::new(
            client.clone(),
            config.model.clone(),
            config.classification_temperature,
        )),
        answer: Arc::new(GeminiLlmGateway::new(
            client,
            config.model.clone(),
            config.answer_temperature,
        )),
    })
}
