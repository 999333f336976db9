// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analysis;
pub mod assistant;
pub mod config;
pub mod corpus;
pub mod error;
pub mod exporter;
pub mod models;
pub mod search;
pub mod utils;

pub use analysis::{expand_query, filter_stop_words, stem, stem_all, tokenize};
pub use assistant::{Assistant, ChatClient};
pub use config::{AssistantConfig, Config, CorpusConfig, ExportConfig, SearchConfig};
pub use corpus::Corpus;
pub use error::{AssistError, Result};
pub use exporter::{ExportManifest, JsonExporter};
pub use models::{
    AssistantReply, ChatMessage, ChatRole, DocKind, IndexedDocument, PageRecord, QueryResult,
    ScoredMatch, SourceRef,
};
pub use search::{DocumentIndex, ScoreWeights, SearchEngine};
pub use utils::{OperationTimer, Validator};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let _config = Config::default_config();
        let _engine = SearchEngine::new(DocumentIndex::default(), &SearchConfig::default());
    }
}
