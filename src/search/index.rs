// file: src/search/index.rs
// description: immutable document index built once from the raw corpus
// reference: internal data structures

use crate::corpus::Corpus;
use crate::models::{DocKind, IndexedDocument, PageRecord};
use tracing::info;

/// Flat, ordered list of searchable documents. Built once per corpus load and
/// read-only afterwards, so it can be shared freely across queries.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    documents: Vec<IndexedDocument>,
}

impl DocumentIndex {
    /// Flatten the corpus in priority order: fiches, then ressources, then
    /// the FAQ and home pages when present. Singleton pages get a fallback
    /// title; listing entries keep whatever the export gave them.
    pub fn build(corpus: &Corpus) -> Self {
        let mut documents = Vec::with_capacity(corpus.record_count());

        for fiche in &corpus.fiches {
            documents.push(flatten(DocKind::Fiche, fiche, ""));
        }
        for ressource in &corpus.ressources {
            documents.push(flatten(DocKind::Ressource, ressource, ""));
        }
        if let Some(faq) = &corpus.faq {
            documents.push(flatten(DocKind::Faq, faq, "FAQ"));
        }
        if let Some(home) = &corpus.home {
            documents.push(flatten(DocKind::Home, home, "Accueil"));
        }

        info!(total = documents.len(), "document index built");

        Self { documents }
    }

    pub fn documents(&self) -> &[IndexedDocument] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn count_of(&self, kind: DocKind) -> usize {
        self.documents.iter().filter(|d| d.kind == kind).count()
    }
}

/// Body is title, summary and every non-empty paragraph, newline-joined in
/// source order. The fallback title fills the `title` field only, never the
/// body.
fn flatten(kind: DocKind, record: &PageRecord, fallback_title: &str) -> IndexedDocument {
    let mut parts: Vec<&str> = Vec::new();

    if let Some(title) = record.title.as_deref()
        && !title.is_empty()
    {
        parts.push(title);
    }
    if let Some(resume) = record.resume.as_deref()
        && !resume.is_empty()
    {
        parts.push(resume);
    }
    if let Some(paragraphs) = &record.paragraphs {
        for paragraph in paragraphs {
            if !paragraph.is_empty() {
                parts.push(paragraph);
            }
        }
    }

    IndexedDocument::new(
        kind,
        record.title_or(fallback_title).to_string(),
        record.url.clone().unwrap_or_default(),
        record.resume.clone().unwrap_or_default(),
        parts.join("\n"),
    )
}
