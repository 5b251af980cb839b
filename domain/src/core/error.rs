//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid speaker: {0}")]
    InvalidSpeaker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_display() {
        assert_eq!(DomainError::EmptyQuery.to_string(), "Query cannot be empty");
    }

    #[test]
    fn test_invalid_category_display() {
        let error = DomainError::InvalidCategory("billing".to_string());
        assert_eq!(error.to_string(), "Invalid category: billing");
    }
}
