// file: src/search/ranker.rs
// description: score ordering, relevance threshold and top-k selection
// reference: internal data structures

use crate::models::{QueryResult, ScoredMatch};
use std::cmp::Ordering;

/// Order matches by descending score, keep those at or above `min_score`,
/// return at most `top_k` of them. The sort is stable, so equal scores keep
/// index order and fiches stay ahead of later kinds. `top_score` reports the
/// best score before the threshold so near misses stay observable.
pub fn rank(mut matches: Vec<ScoredMatch<'_>>, top_k: usize, min_score: f64) -> QueryResult {
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let top_score = matches.first().map_or(0.0, |m| m.score);
    let relevant: Vec<&ScoredMatch> = matches.iter().filter(|m| m.score >= min_score).collect();

    QueryResult {
        has_relevant_results: !relevant.is_empty(),
        documents: relevant
            .iter()
            .take(top_k)
            .map(|m| m.document.clone())
            .collect(),
        top_score,
    }
}
