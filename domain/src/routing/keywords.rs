//! Deterministic out-of-scope pre-filter.
//!
//! Runs before any model call. A query containing one of the keywords
//! (case-insensitive substring) is escalated without consulting the model.

/// Phrases that always route to a human.
pub const DEFAULT_ESCALATION_KEYWORDS: &[&str] = &[
    "lawsuit",
    "legal",
    "sue",
    "court",
    "lawyer",
    "broken screen",
    "repair my",
    "fix my device",
    "payment failed",
    "payment error",
    "charged twice",
    "spam",
    "abuse",
    "hate",
    "scam",
];

/// Set of lower-cased escalation phrases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscalationKeywords {
    keywords: Vec<String>,
}

impl EscalationKeywords {
    /// Build a keyword set. Blank entries are dropped; the rest are
    /// trimmed and lower-cased so matching needs no per-query work on them.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// A set that never matches.
    pub fn empty() -> Self {
        Self {
            keywords: Vec::new(),
        }
    }

    /// First keyword contained in `query`, if any.
    ///
    /// Which keyword wins when several match is unspecified; the routing
    /// outcome is the same either way.
    pub fn find_match(&self, query: &str) -> Option<&str> {
        let lowered = query.to_lowercase();
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }

    pub fn matches(&self, query: &str) -> bool {
        self.find_match(query).is_some()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }
}

impl Default for EscalationKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_ESCALATION_KEYWORDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_matches_known_phrases() {
        let keywords = EscalationKeywords::default();
        assert_eq!(keywords.len(), DEFAULT_ESCALATION_KEYWORDS.len());
        assert_eq!(
            keywords.find_match("I will file a LAWSUIT tomorrow"),
            Some("lawsuit")
        );
        assert_eq!(
            keywords.find_match("My payment failed twice"),
            Some("payment failed")
        );
        assert_eq!(
            keywords.find_match("can you repair my phone"),
            Some("repair my")
        );
    }

    #[test]
    fn test_case_insensitive_substring() {
        let keywords = EscalationKeywords::default();
        assert!(keywords.matches("I have a Broken Screen"));
        assert!(keywords.matches("THIS IS A SCAM!!!"));
    }

    #[test]
    fn test_in_scope_queries_do_not_match() {
        let keywords = EscalationKeywords::default();
        assert!(!keywords.matches("What is the price of SmartWatch Pro X?"));
        assert!(!keywords.matches("What is your return policy?"));
        assert!(!keywords.matches("What is the capital of France?"));
        assert!(!keywords.matches("My laptop screen is broken"));
    }

    #[test]
    fn test_custom_keywords_are_normalized() {
        let keywords = EscalationKeywords::new(["  Refund Fraud ", "", "   "]);
        assert_eq!(keywords.len(), 1);
        assert_eq!(keywords.iter().next(), Some("refund fraud"));
        assert!(keywords.matches("this is refund fraud"));
    }

    #[test]
    fn test_empty_set_never_matches() {
        let keywords = EscalationKeywords::empty();
        assert!(keywords.is_empty());
        assert!(!keywords.matches("lawsuit"));
    }

    #[test]
    fn test_multiple_matches_still_match() {
        let keywords = EscalationKeywords::default();
        let hit = keywords.find_match("my lawyer says this is a scam").unwrap();
        assert!(hit == "lawyer" || hit == "scam");
    }
}
