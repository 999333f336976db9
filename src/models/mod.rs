// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod chat;
pub mod document;
pub mod record;
pub mod search_result;

pub use chat::{AssistantReply, ChatMessage, ChatRole, SourceRef};
pub use document::{DocKind, IndexedDocument};
pub use record::PageRecord;
pub use search_result::{QueryResult, ScoredMatch};
