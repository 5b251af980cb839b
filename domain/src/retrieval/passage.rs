//! Retrieved knowledge-base passages.

use serde::{Deserialize, Serialize};

/// One passage returned by the retrieval service with its relevance score.
///
/// Higher scores mean more relevant; the scale is defined by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedPassage {
    pub content: String,
    pub score: f32,
}

impl RetrievedPassage {
    pub fn new(content: impl Into<String>, score: f32) -> Self {
        Self {
            content: content.into(),
            score,
        }
    }
}
