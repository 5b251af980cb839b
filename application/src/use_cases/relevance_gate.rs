//! Relevance gate.
//!
//! Wraps the retrieval call and decides whether its result is reliable
//! enough to answer from. Apart from the retrieval call it is a pure
//! function of the result.

use crate::ports::retriever::{RetrievalError, Retriever};
use helpdesk_domain::util::truncate_str;
use helpdesk_domain::{Query, RelevanceVerdict};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Retrieval plus the reliability threshold.
#[derive(Clone)]
pub struct RelevanceGate {
    retriever: Arc<dyn Retriever>,
    threshold: f32,
    top_k: usize,
}

impl RelevanceGate {
    pub fn new(retriever: Arc<dyn Retriever>, threshold: f32, top_k: usize) -> Self {
        Self {
            retriever,
            threshold,
            top_k,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Retrieve the top-k passages for `query` and judge them.
    ///
    /// An empty result is a weak verdict, not an error. A failing retrieval
    /// service is reported as-is; the caller decides what it means.
    pub async fn evaluate(&self, query: &Query) -> Result<RelevanceVerdict, RetrievalError> {
        let passages = self
            .retriever
            .retrieve(query.content(), self.top_k)
            .await?;

        let received = passages.len();
        let dropped = passages.iter().filter(|p| !p.score.is_finite()).count();
        if dropped > 0 {
            warn!("Discarded {} passage(s) with non-finite score", dropped);
        }

        let verdict = RelevanceVerdict::judge(passages, self.threshold, self.top_k);
        debug!(
            "Retrieved {} passage(s) for '{}'",
            received,
            truncate_str(query.content(), 100)
        );

        match verdict.best_score() {
            Some(best) if verdict.is_reliable() => {
                info!("Found reliable context with score: {:.3}", best);
            }
            Some(best) => {
                warn!("No reliable context found. Best score: {:.3}", best);
            }
            None => {
                warn!("No reliable context found. Retrieval returned no passages");
            }
        }

        Ok(verdict)
    }
}
