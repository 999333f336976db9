// file: src/models/chat.rs
// description: conversation and citation models for the assistant layer
// reference: openai chat completions message shape

use crate::models::{DocKind, IndexedDocument};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One turn of the conversation as the caller sees it. The system role never
/// appears here; it exists only inside the API payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Citation entry surfaced next to an answer. Field names follow the corpus
/// export vocabulary (`type`, `resume`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRef {
    #[serde(rename = "type")]
    pub kind: DocKind,
    pub title: String,
    pub url: String,
    #[serde(rename = "resume")]
    pub summary: String,
}

impl SourceRef {
    pub fn from_document(doc: &IndexedDocument) -> Self {
        Self {
            kind: doc.kind,
            title: doc.title.clone(),
            url: doc.url.clone(),
            summary: doc.summary.clone(),
        }
    }
}

/// Outcome of one assistant round trip.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantReply {
    pub answer: String,
    pub sources: Vec<SourceRef>,
    pub has_relevant_results: bool,
}
