//! Intent classification.
//!
//! Two tiers: a case-insensitive substring scan against the escalation
//! keywords, then one model call when no keyword hits.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use helpdesk_domain::util::truncate_str;
use helpdesk_domain::{Category, EscalationKeywords, PromptTemplate, Query};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// How a category was decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationSource {
    /// An escalation keyword matched; the model was not called.
    Keyword(String),
    /// The model returned a valid category.
    Model,
    /// The model output did not name a category; defaulted to `General`.
    Fallback { raw: String },
}

impl ClassificationSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationSource::Keyword(_) => "keyword",
            ClassificationSource::Model => "model",
            ClassificationSource::Fallback { .. } => "fallback",
        }
    }

    /// Whether the model was consulted.
    pub fn used_model(&self) -> bool {
        !matches!(self, ClassificationSource::Keyword(_))
    }
}

impl fmt::Display for ClassificationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub source: ClassificationSource,
}

impl Classification {
    fn keyword(keyword: &str) -> Self {
        Self {
            category: Category::Escalate,
            source: ClassificationSource::Keyword(keyword.to_string()),
        }
    }
}

/// Maps a query to exactly one [`Category`].
#[derive(Clone)]
pub struct IntentClassifier {
    gateway: Arc<dyn LlmGateway>,
    keywords: EscalationKeywords,
}

impl IntentClassifier {
    pub fn new(gateway: Arc<dyn LlmGateway>, keywords: EscalationKeywords) -> Self {
        Self { gateway, keywords }
    }

    pub fn keywords(&self) -> &EscalationKeywords {
        &self.keywords
    }

    /// Classify `query`.
    ///
    /// Makes zero model calls on a keyword hit and exactly one otherwise.
    /// Output that names no category becomes `General`; only a failing
    /// model call is an error.
    pub async fn classify(&self, query: &Query) -> Result<Classification, GatewayError> {
        if let Some(keyword) = self.keywords.find_match(query.content()) {
            info!("Escalation keyword '{}' matched, skipping model", keyword);
            return Ok(Classification::keyword(keyword));
        }

        let prompt = PromptTemplate::classification_prompt(query.content());
        debug!("Classifying with model {}", self.gateway.model());
        let raw = self.gateway.generate(&prompt).await?;

        match Category::from_model_output(&raw) {
            Some(category) => {
                info!("Query classified as: {}", category);
                Ok(Classification {
                    category,
                    source: ClassificationSource::Model,
                })
            }
            None => {
                warn!(
                    "Unrecognized classification '{}', defaulting to general",
                    truncate_str(raw.trim(), 80)
                );
                Ok(Classification {
                    category: Category::General,
                    source: ClassificationSource::Fallback { raw },
                })
            }
        }
    }
}
