//! Router configuration: the tunables of the routing policy.
//!
//! [`RouterConfig`] groups the static parameters the router reads on every
//! turn. It is built once at startup and shared read-only.

use helpdesk_domain::{
    DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_TOP_K, EscalationKeywords, HISTORY_WINDOW,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the router does when the retrieval service itself fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrievalFailurePolicy {
    /// Surface the failure as `DownstreamUnavailable` (default)
    #[default]
    Propagate,
    /// Treat the failure like a result with no reliable passage
    WeakContext,
}

impl fmt::Display for RetrievalFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetrievalFailurePolicy::Propagate => write!(f, "propagate"),
            RetrievalFailurePolicy::WeakContext => write!(f, "weak_context"),
        }
    }
}

impl std::str::FromStr for RetrievalFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "propagate" | "error" => Ok(RetrievalFailurePolicy::Propagate),
            "weak_context" | "weak-context" | "fallback" => Ok(RetrievalFailurePolicy::WeakContext),
            _ => Err(format!("Invalid RetrievalFailurePolicy: {}", s)),
        }
    }
}

/// Routing policy parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    /// Minimum best passage score for context to count as reliable.
    pub relevance_threshold: f32,
    /// Number of passages requested per query.
    pub top_k: usize,
    /// Number of prior history entries folded into the answer prompt.
    /// Never more than [`HISTORY_WINDOW`].
    pub history_window: usize,
    /// Out-of-scope pre-filter.
    pub escalation_keywords: EscalationKeywords,
    /// Handling of retrieval service failures.
    pub on_retrieval_error: RetrievalFailurePolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            history_window: HISTORY_WINDOW,
            escalation_keywords: EscalationKeywords::default(),
            on_retrieval_error: RetrievalFailurePolicy::default(),
        }
    }
}

impl RouterConfig {
    // ==================== Builder Methods ====================

    pub fn with_relevance_threshold(mut self, threshold: f32) -> Self {
        self.relevance_threshold = threshold;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Narrow the history window. Values above [`HISTORY_WINDOW`] are capped.
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window.min(HISTORY_WINDOW);
        self
    }

    pub fn with_escalation_keywords(mut self, keywords: EscalationKeywords) -> Self {
        self.escalation_keywords = keywords;
        self
    }

    pub fn with_retrieval_failure_policy(mut self, policy: RetrievalFailurePolicy) -> Self {
        self.on_retrieval_error = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RouterConfig::default();
        assert_eq!(config.relevance_threshold, 0.4);
        assert_eq!(config.top_k, 3);
        assert_eq!(config.history_window, 4);
        assert!(config.escalation_keywords.matches("lawsuit"));
        assert_eq!(config.on_retrieval_error, RetrievalFailurePolicy::Propagate);
    }

    #[test]
    fn test_builder() {
        let config = RouterConfig::default()
            .with_relevance_threshold(0.6)
            .with_top_k(5)
            .with_history_window(2)
            .with_escalation_keywords(EscalationKeywords::empty())
            .with_retrieval_failure_policy(RetrievalFailurePolicy::WeakContext);

        assert_eq!(config.relevance_threshold, 0.6);
        assert_eq!(config.top_k, 5);
        assert_eq!(config.history_window, 2);
        assert!(config.escalation_keywords.is_empty());
        assert_eq!(config.on_retrieval_error, RetrievalFailurePolicy::WeakContext);
    }

    #[test]
    fn test_history_window_is_capped() {
        let config = RouterConfig::default().with_history_window(8);
        assert_eq!(config.history_window, HISTORY_WINDOW);
    }

    #[test]
    fn test_failure_policy_parse() {
        assert_eq!(
            "weak_context".parse::<RetrievalFailurePolicy>().unwrap(),
            RetrievalFailurePolicy::WeakContext
        );
        assert_eq!(
            "Propagate".parse::<RetrievalFailurePolicy>().unwrap(),
            RetrievalFailurePolicy::Propagate
        );
        assert!("retry".parse::<RetrievalFailurePolicy>().is_err());
    }
}
