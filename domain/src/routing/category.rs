//! Intent categories for a customer query.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The intent assigned to exactly one turn.
///
/// `Escalate` is the only category that bypasses retrieval; the other three
/// are answered from the knowledge base when it has reliable context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Product features, prices, specifications, warranty
    Products,
    /// Return policy, refunds, return process
    Returns,
    /// Support hours, contact information, general inquiries
    General,
    /// Out of scope for the assistant; handed to a human
    Escalate,
}

impl Category {
    /// All categories, in the order they are listed to the classifier model.
    pub const ALL: [Category; 4] = [
        Category::Products,
        Category::Returns,
        Category::General,
        Category::Escalate,
    ];

    /// Token the classifier model is asked to emit for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Products => "products",
            Category::Returns => "returns",
            Category::General => "general",
            Category::Escalate => "escalate",
        }
    }

    /// Description shown to the classifier model
    pub fn description(&self) -> &'static str {
        match self {
            Category::Products => {
                "Questions about product features, prices, specifications, warranty"
            }
            Category::Returns => "Questions about return policy, refunds, return process",
            Category::General => {
                "Questions about support hours, contact information, general inquiries"
            }
            Category::Escalate => {
                "Complex issues, complaints, payment problems, device repairs not in knowledge base, abusive messages, or unclear queries"
            }
        }
    }

    /// Whether this category skips retrieval and answers with the hand-off message
    pub fn is_escalation(&self) -> bool {
        matches!(self, Category::Escalate)
    }

    /// Parse a raw classifier reply.
    ///
    /// The reply is trimmed and lower-cased; wrapping quotes, backticks and a
    /// trailing period are ignored. Returns `None` for anything that is not
    /// exactly one known category token.
    pub fn from_model_output(raw: &str) -> Option<Category> {
        let token = raw
            .trim()
            .trim_end_matches('.')
            .trim_matches(|c| c == '"' || c == '\'' || c == '`')
            .trim()
            .to_lowercase();
        token.parse().ok()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "products" => Ok(Category::Products),
            "returns" => Ok(Category::Returns),
            "general" => Ok(Category::General),
            "escalate" => Ok(Category::Escalate),
            _ => Err(DomainError::InvalidCategory(s.to_string())),
        }
    }
}
