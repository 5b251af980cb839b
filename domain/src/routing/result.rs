//! The structured output of one routing call.

use super::category::Category;
use serde::Serialize;
use std::fmt;

/// How a turn was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOutcome {
    /// Out of scope; fixed hand-off message
    Escalated,
    /// In scope but no reliable context; fixed fallback message
    WeakContext,
    /// Generated from reliable retrieved context
    Answered,
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOutcome::Escalated => write!(f, "escalated"),
            RouteOutcome::WeakContext => write!(f, "weak_context"),
            RouteOutcome::Answered => write!(f, "answered"),
        }
    }
}

/// Response text plus the category label shown to the customer.
///
/// Immutable once built. Serializes as `{"response": ..., "category": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingResult {
    #[serde(rename = "response")]
    response_text: String,
    category: Category,
    #[serde(skip)]
    outcome: RouteOutcome,
}

impl RoutingResult {
    pub fn new(
        response_text: impl Into<String>,
        category: Category,
        outcome: RouteOutcome,
    ) -> Self {
        Self {
            response_text: response_text.into(),
            category,
            outcome,
        }
    }

    pub fn response_text(&self) -> &str {
        &self.response_text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn outcome(&self) -> RouteOutcome {
        self.outcome
    }

    pub fn into_response_text(self) -> String {
        self.response_text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_response_and_category_only() {
        let result = RoutingResult::new("hello", Category::General, RouteOutcome::Answered);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"response": "hello", "category": "general"})
        );
    }

    #[test]
    fn test_accessors() {
        let result = RoutingResult::new("bye", Category::Escalate, RouteOutcome::Escalated);
        assert_eq!(result.response_text(), "bye");
        assert_eq!(result.category(), Category::Escalate);
        assert_eq!(result.outcome(), RouteOutcome::Escalated);
        assert_eq!(result.into_response_text(), "bye");
    }
}
