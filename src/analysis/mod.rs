// file: src/analysis/mod.rs
// description: text analysis module exports
// reference: internal module structure

pub mod normalizer;
pub mod stemmer;
pub mod stopwords;
pub mod synonyms;

pub use normalizer::tokenize;
pub use stemmer::{stem, stem_all};
pub use stopwords::filter_stop_words;
pub use synonyms::expand_query;
