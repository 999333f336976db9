// file: src/models/search_result.rs
// description: scored match and query result models for the ranking engine
// reference: internal data structures

use crate::models::IndexedDocument;
use serde::Serialize;

/// One document with its relevance score for the current query. Borrowed from
/// the index and alive only while the query is being ranked.
#[derive(Debug, Clone)]
pub struct ScoredMatch<'a> {
    pub document: &'a IndexedDocument,

    pub score: f64,

    /// Query tokens that hit the title (exact or by stem).
    pub title_matches: usize,

    /// Query tokens that hit the summary.
    pub summary_matches: usize,

    /// Query tokens found at least once in the body.
    pub content_matches: usize,
}

impl ScoredMatch<'_> {
    /// One-line display form for score listings.
    pub fn format_summary(&self) -> String {
        format!(
            "{:>6.1}  [{}] {} (t:{} s:{} c:{})",
            self.score,
            self.document.kind.as_str(),
            self.document.title,
            self.title_matches,
            self.summary_matches,
            self.content_matches
        )
    }
}

/// Final answer of one retrieval round: ranked documents that passed the
/// relevance threshold, capped at K.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    pub documents: Vec<IndexedDocument>,

    /// True iff at least one document met the threshold.
    pub has_relevant_results: bool,

    /// Best score over everything that scored at all, before thresholding.
    /// Kept for observability of near-miss queries.
    pub top_score: f64,
}

impl QueryResult {
    pub fn empty() -> Self {
        Self {
            documents: Vec::new(),
            has_relevant_results: false,
            top_score: 0.0,
        }
    }
}
