//! Reliability decision over a retrieval result.
//!
//! A single score threshold separates context the assistant may answer from
//! and context it must not. Rejecting a usable answer is preferred over
//! answering from irrelevant text.

use super::passage::RetrievedPassage;

/// Minimum best score for retrieved context to count as reliable.
pub const DEFAULT_RELEVANCE_THRESHOLD: f32 = 0.4;

/// Number of passages requested from the retrieval service.
pub const DEFAULT_TOP_K: usize = 3;

/// Outcome of judging one retrieval result.
#[derive(Debug, Clone, PartialEq)]
pub struct RelevanceVerdict {
    passages: Vec<RetrievedPassage>,
    reliable: bool,
}

impl RelevanceVerdict {
    /// Judge a retrieval result against `threshold`.
    ///
    /// Passages with a non-finite score are discarded, the rest are ordered by
    /// descending score and cut to `top_k`. The verdict is reliable iff the
    /// best remaining score is at least `threshold`.
    pub fn judge(passages: Vec<RetrievedPassage>, threshold: f32, top_k: usize) -> Self {
        let mut passages: Vec<RetrievedPassage> = passages
            .into_iter()
            .filter(|p| p.score.is_finite())
            .collect();
        passages.sort_by(|a, b| b.score.total_cmp(&a.score));
        passages.truncate(top_k);

        let reliable = passages
            .first()
            .is_some_and(|best| best.score >= threshold);

        Self { passages, reliable }
    }

    /// Weak verdict with no passages.
    pub fn weak() -> Self {
        Self {
            passages: Vec::new(),
            reliable: false,
        }
    }

    pub fn is_reliable(&self) -> bool {
        self.reliable
    }

    /// Passages in descending score order
    pub fn passages(&self) -> &[RetrievedPassage] {
        &self.passages
    }

    pub fn into_passages(self) -> Vec<RetrievedPassage> {
        self.passages
    }

    /// Highest score among the kept passages
    pub fn best_score(&self) -> Option<f32> {
        self.passages.first().map(|p| p.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passage(content: &str, score: f32) -> RetrievedPassage {
        RetrievedPassage::new(content, score)
    }

    #[test]
    fn test_reliable_at_threshold() {
        let verdict = RelevanceVerdict::judge(
            vec![passage("a", 0.4)],
            DEFAULT_RELEVANCE_THRESHOLD,
            DEFAULT_TOP_K,
        );
        assert!(verdict.is_reliable());
    }

    #[test]
    fn test_weak_below_threshold() {
        let verdict = RelevanceVerdict::judge(
            vec![passage("a", 0.39), passage("b", 0.05)],
            DEFAULT_RELEVANCE_THRESHOLD,
            DEFAULT_TOP_K,
        );
        assert!(!verdict.is_reliable());
        assert_eq!(verdict.passages().len(), 2);
    }

    #[test]
    fn test_empty_is_weak() {
        let verdict = RelevanceVerdict::judge(vec![], DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_TOP_K);
        assert!(!verdict.is_reliable());
        assert!(verdict.best_score().is_none());
        assert_eq!(verdict, RelevanceVerdict::weak());
    }

    #[test]
    fn test_uses_best_score_not_first() {
        let verdict = RelevanceVerdict::judge(
            vec![passage("low", 0.1), passage("high", 0.85), passage("mid", 0.5)],
            DEFAULT_RELEVANCE_THRESHOLD,
            DEFAULT_TOP_K,
        );
        assert!(verdict.is_reliable());
        let order: Vec<&str> = verdict.passages().iter().map(|p| p.content.as_str()).collect();
        assert_eq!(order, vec!["high", "mid", "low"]);
        assert_eq!(verdict.best_score(), Some(0.85));
    }

    #[test]
    fn test_truncates_to_top_k() {
        let verdict = RelevanceVerdict::judge(
            vec![
                passage("a", 0.9),
                passage("b", 0.8),
                passage("c", 0.7),
                passage("d", 0.95),
            ],
            DEFAULT_RELEVANCE_THRESHOLD,
            3,
        );
        let order: Vec<&str> = verdict.passages().iter().map(|p| p.content.as_str()).collect();
        assert_eq!(order, vec!["d", "a", "b"]);
    }

    #[test]
    fn test_non_finite_scores_are_dropped() {
        let verdict = RelevanceVerdict::judge(
            vec![passage("nan", f32::NAN), passage("inf", f32::INFINITY), passage("ok", 0.2)],
            DEFAULT_RELEVANCE_THRESHOLD,
            DEFAULT_TOP_K,
        );
        assert_eq!(verdict.passages().len(), 1);
        assert!(!verdict.is_reliable());
    }

    #[test]
    fn test_equal_scores_keep_service_order() {
        let verdict = RelevanceVerdict::judge(
            vec![passage("first", 0.6), passage("second", 0.6)],
            DEFAULT_RELEVANCE_THRESHOLD,
            DEFAULT_TOP_K,
        );
        assert_eq!(verdict.passages()[0].content, "first");
        assert_eq!(verdict.passages()[1].content, "second");
    }
}
