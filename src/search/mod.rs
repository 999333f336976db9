// file: src/search/mod.rs
// description: document indexing and relevance scoring module exports
// reference: internal module structure

pub mod engine;
pub mod index;
pub mod ranker;
pub mod scorer;

pub use engine::SearchEngine;
pub use index::DocumentIndex;
pub use ranker::rank;
pub use scorer::{ScoreWeights, score_document};
