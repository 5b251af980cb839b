//! Query value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The customer's current turn (Value Object)
///
/// A query is never empty after trimming. Empty input is rejected where the
/// query enters the system, so the router never has to handle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Query {
    content: String,
}

impl Query {
    /// Try to create a new query, returning None if it is blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the query text exactly as the customer typed it
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl TryFrom<String> for Query {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Query::try_new(s).ok_or(DomainError::EmptyQuery)
    }
}

impl TryFrom<&str> for Query {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Query::try_from(s.to_string())
    }
}

impl From<Query> for String {
    fn from(q: Query) -> Self {
        q.content
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_creation() {
        let q = Query::try_new("What is the price of SmartWatch Pro X?").unwrap();
        assert_eq!(q.content(), "What is the price of SmartWatch Pro X?");
    }

    #[test]
    fn test_query_keeps_surrounding_whitespace() {
        let q = Query::try_new("  hello  ").unwrap();
        assert_eq!(q.content(), "  hello  ");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(Query::try_new("").is_none());
        assert!(Query::try_new("   ").is_none());
        assert!(Query::try_new("\n\t").is_none());
    }

    #[test]
    fn test_try_from_str_error() {
        let err = Query::try_from("  ").unwrap_err();
        assert_eq!(err, DomainError::EmptyQuery);
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        assert!(serde_json::from_str::<Query>("\"   \"").is_err());
        let q: Query = serde_json::from_str("\"return policy?\"").unwrap();
        assert_eq!(q.content(), "return policy?");
    }
}
