//! Routing policy configuration from TOML (`[router]` section)

use helpdesk_application::{RetrievalFailurePolicy, RouterConfig};
use helpdesk_domain::{
    ConfigIssue, ConfigIssueCode, DEFAULT_ESCALATION_KEYWORDS, DEFAULT_RELEVANCE_THRESHOLD,
    DEFAULT_TOP_K, EscalationKeywords, HISTORY_WINDOW,
};
use serde::{Deserialize, Serialize};

/// Raw router configuration from TOML
///
/// # Example
///
/// ```toml
/// [router]
/// relevance_threshold = 0.4
/// top_k = 3
/// history_window = 4
/// escalation_keywords = ["lawsuit", "refund fraud"]
/// on_retrieval_error = "weak_context"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRouterConfig {
    /// Minimum best passage score for context to count as reliable
    pub relevance_threshold: f32,
    /// Passages requested per query
    pub top_k: usize,
    /// Prior entries folded into the answer prompt
    pub history_window: usize,
    /// Out-of-scope phrases, matched case-insensitively
    pub escalation_keywords: Vec<String>,
    /// "propagate" or "weak_context"
    pub on_retrieval_error: String,
}

impl Default for FileRouterConfig {
    fn default() -> Self {
        Self {
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            history_window: HISTORY_WINDOW,
            escalation_keywords: DEFAULT_ESCALATION_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            on_retrieval_error: RetrievalFailurePolicy::default().to_string(),
        }
    }
}

impl FileRouterConfig {
    /// Convert to [`RouterConfig`], collecting issues.
    ///
    /// Invalid values are reported and replaced by their defaults, so the
    /// returned config is always usable when no issue is an error.
    pub fn to_router_config(&self) -> (RouterConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let mut config = RouterConfig::default();

        if (0.0..=1.0).contains(&self.relevance_threshold) {
            config.relevance_threshold = self.relevance_threshold;
        } else {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "router.relevance_threshold".to_string(),
                },
                format!(
                    "router.relevance_threshold: {} is outside [0, 1]",
                    self.relevance_threshold
                ),
            ));
        }

        if self.top_k == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "router.top_k".to_string(),
                },
                "router.top_k must be at least 1",
            ));
        } else {
            config.top_k = self.top_k;
        }

        if self.history_window == 0 || self.history_window > HISTORY_WINDOW {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::OutOfRange {
                    field: "router.history_window".to_string(),
                },
                format!(
                    "router.history_window: {} is outside [1, {}]",
                    self.history_window, HISTORY_WINDOW
                ),
            ));
        } else {
            config.history_window = self.history_window;
        }

        if self.escalation_keywords.iter().any(|k| k.trim().is_empty()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyEntry {
                    field: "router.escalation_keywords".to_string(),
                },
                "router.escalation_keywords: empty entries are ignored",
            ));
        }
        config.escalation_keywords = EscalationKeywords::new(&self.escalation_keywords);

        match self.on_retrieval_error.parse::<RetrievalFailurePolicy>() {
            Ok(policy) => config.on_retrieval_error = policy,
            Err(_) => issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidEnumValue {
                    field: "router.on_retrieval_error".to_string(),
                    value: self.on_retrieval_error.clone(),
                    valid_values: vec!["propagate".to_string(), "weak_context".to_string()],
                },
                format!(
                    "router.on_retrieval_error: unknown value '{}'",
                    self.on_retrieval_error
                ),
            )),
        }

        (config, issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_convert_cleanly() {
        let (config, issues) = FileRouterConfig::default().to_router_config();
        assert!(issues.is_empty());
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn test_out_of_range_values_are_errors() {
        let file = FileRouterConfig {
            relevance_threshold: 1.5,
            top_k: 0,
            history_window: 0,
            ..Default::default()
        };

        let (config, issues) = file.to_router_config();

        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.is_error()));
        assert_eq!(config.relevance_threshold, DEFAULT_RELEVANCE_THRESHOLD);
        assert_eq!(config.top_k, DEFAULT_TOP_K);
    }

    #[test]
    fn test_history_window_above_four_is_rejected() {
        let file = FileRouterConfig {
            history_window: 8,
            ..Default::default()
        };

        let (config, issues) = file.to_router_config();

        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(
            &issues[0].code,
            ConfigIssueCode::OutOfRange { field } if field == "router.history_window"
        ));
        assert_eq!(config.history_window, HISTORY_WINDOW);
    }

    #[test]
    fn test_blank_keyword_is_a_warning() {
        let file = FileRouterConfig {
            escalation_keywords: vec!["Refund Fraud".to_string(), "  ".to_string()],
            ..Default::default()
        };

        let (config, issues) = file.to_router_config();

        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
        assert_eq!(config.escalation_keywords.len(), 1);
        assert!(config.escalation_keywords.matches("this is refund fraud"));
    }

    #[test]
    fn test_retrieval_policy_is_parsed() {
        let file = FileRouterConfig {
            on_retrieval_error: "weak_context".to_string(),
            ..Default::default()
        };
        let (config, _) = file.to_router_config();
        assert_eq!(config.on_retrieval_error, RetrievalFailurePolicy::WeakContext);

        let file = FileRouterConfig {
            on_retrieval_error: "retry".to_string(),
            ..Default::default()
        };
        let (_, issues) = file.to_router_config();
        assert!(matches!(
            issues[0].code,
            ConfigIssueCode::InvalidEnumValue { .. }
        ));
    }
}
