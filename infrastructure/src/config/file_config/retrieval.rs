//! Retrieval service configuration from TOML (`[retrieval]` section)

use helpdesk_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which retrieval backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalProviderKind {
    /// Chroma vector store, queries embedded with the generation provider
    Chroma,
    /// Generic `POST /retrieve` service
    Http,
}

impl fmt::Display for RetrievalProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalProviderKind::Chroma => write!(f, "chroma"),
            RetrievalProviderKind::Http => write!(f, "http"),
        }
    }
}

impl FromStr for RetrievalProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chroma" => Ok(RetrievalProviderKind::Chroma),
            "http" => Ok(RetrievalProviderKind::Http),
            _ => Err(format!("Invalid retrieval provider: {}", s)),
        }
    }
}

/// Raw retrieval configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetrievalConfig {
    /// "chroma" or "http"
    pub provider: String,
    /// Base URL of the retrieval service
    pub base_url: String,
    /// Chroma collection name
    pub collection: String,
    /// Embedding model used for Chroma queries
    pub embedding_model: String,
    /// Per-request deadline
    pub timeout_seconds: u64,
}

impl Default for FileRetrievalConfig {
    fn default() -> Self {
        Self {
            provider: "chroma".to_string(),
            base_url: "http://localhost:8000".to_string(),
            collection: "techgear_support".to_string(),
            embedding_model: "models/embedding-001".to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileRetrievalConfig {
    pub fn parse_provider(&self) -> (Option<RetrievalProviderKind>, Vec<ConfigIssue>) {
        match self.provider.parse() {
            Ok(kind) => (Some(kind), Vec::new()),
            Err(_) => (
                None,
                vec![ConfigIssue::error(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "retrieval.provider".to_string(),
                        value: self.provider.clone(),
                        valid_values: vec!["chroma".to_string(), "http".to_string()],
                    },
                    format!("retrieval.provider: unknown provider '{}'", self.provider),
                )],
            ),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let (kind, mut issues) = self.parse_provider();

        if kind == Some(RetrievalProviderKind::Chroma) && self.collection.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::Missing {
                    field: "retrieval.collection".to_string(),
                },
                "retrieval.collection is required for the chroma provider",
            ));
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "retrieval.timeout_seconds".to_string(),
                },
                "retrieval.timeout_seconds cannot be 0",
            ));
        }

        issues
    }
}
