//! Generation service configuration from TOML (`[generation]` section)

use helpdesk_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Supported generation providers.
pub const GENERATION_PROVIDERS: &[&str] = &["gemini"];

/// Raw generation configuration from TOML
///
/// # Example
///
/// ```toml
/// [generation]
/// provider = "gemini"
/// model = "gemini-2.0-flash-exp"
/// api_key_env = "GOOGLE_API_KEY"
/// answer_temperature = 0.3
/// classification_temperature = 0.1
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Provider name
    pub provider: String,
    /// Model identifier
    pub model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`)
    pub api_key: Option<String>,
    /// Base URL of the generation API
    pub base_url: String,
    /// Sampling temperature for answers
    pub answer_temperature: f32,
    /// Sampling temperature for classification
    pub classification_temperature: f32,
    /// Per-request deadline
    pub timeout_seconds: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            api_key_env: "GOOGLE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            answer_temperature: 0.3,
            classification_temperature: 0.1,
            timeout_seconds: 30,
        }
    }
}

impl FileGenerationConfig {
    /// Resolve the API key: explicit value first, then the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.trim().is_empty())
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !GENERATION_PROVIDERS.contains(&self.provider.to_lowercase().as_str()) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEnumValue {
                    field: "generation.provider".to_string(),
                    value: self.provider.clone(),
                    valid_values: GENERATION_PROVIDERS.iter().map(|p| p.to_string()).collect(),
                },
                format!("generation.provider: unknown provider '{}'", self.provider),
            ));
        }

        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::Missing {
                    field: "generation.model".to_string(),
                },
                "generation.model cannot be empty",
            ));
        }

        for (field, value) in [
            ("generation.answer_temperature", self.answer_temperature),
            (
                "generation.classification_temperature",
                self.classification_temperature,
            ),
        ] {
            if !(0.0..=2.0).contains(&value) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::OutOfRange {
                        field: field.to_string(),
                    },
                    format!("{}: {} is outside [0, 2]", field, value),
                ));
            }
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "generation.timeout_seconds".to_string(),
                },
                "generation.timeout_seconds cannot be 0",
            ));
        }

        issues
    }
}
