//! Retrieval domain.
//!
//! - [`passage::RetrievedPassage`]: a scored knowledge-base passage
//! - [`relevance::RelevanceVerdict`]: whether a retrieval result is reliable enough to answer from

pub mod passage;
pub mod relevance;
