// file: src/models/document.rs
// description: normalized indexed document model with stable content ids
// reference: internal data structures

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocKind {
    Fiche,
    Ressource,
    Faq,
    Home,
}

impl DocKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocKind::Fiche => "fiche",
            DocKind::Ressource => "ressource",
            DocKind::Faq => "faq",
            DocKind::Home => "home",
        }
    }

    /// Uppercase tag used when rendering context blocks, e.g. `[FICHE]`.
    pub fn label(&self) -> &'static str {
        match self {
            DocKind::Fiche => "FICHE",
            DocKind::Ressource => "RESSOURCE",
            DocKind::Faq => "FAQ",
            DocKind::Home => "HOME",
        }
    }
}

/// Uniform document shape the ranking engine works on. Built once from the
/// raw corpus records; immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// Hex SHA-256 over kind, url and body. Stable across reloads of the
    /// same corpus snapshot.
    pub id: String,
    pub kind: DocKind,
    pub title: String,
    pub url: String,
    /// Short summary paragraph (`resume` in the corpus exports).
    pub summary: String,
    /// Title, summary and paragraphs joined with newlines.
    pub body: String,
}

impl IndexedDocument {
    pub fn new(kind: DocKind, title: String, url: String, summary: String, body: String) -> Self {
        let id = Self::compute_id(kind, &url, &body);
        Self {
            id,
            kind,
            title,
            url,
            summary,
            body,
        }
    }

    fn compute_id(kind: DocKind, url: &str, body: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(kind.as_str().as_bytes());
        hasher.update(url.as_bytes());
        hasher.update(body.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// First 12 hex chars of the id, enough to stay unique in a corpus of a
    /// few hundred entries. Used for log lines and export filenames.
    pub fn short_id(&self) -> &str {
        &self.id[..12]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_creation() {
        let doc = IndexedDocument::new(
            DocKind::Fiche,
            "Rénover l'éclairage public".to_string(),
            "/fiches/eclairage-public".to_string(),
            "Réduire la facture énergétique".to_string(),
            "Rénover l'éclairage public\nRéduire la facture énergétique".to_string(),
        );

        assert_eq!(doc.kind, DocKind::Fiche);
        assert_eq!(doc.id.len(), 64);
        assert_eq!(doc.short_id().len(), 12);
    }

    #[test]
    fn test_id_stability() {
        let make = || {
            IndexedDocument::new(
                DocKind::Faq,
                "FAQ".to_string(),
                "/faq".to_string(),
                String::new(),
                "FAQ\nquestions fréquentes".to_string(),
            )
        };
        assert_eq!(make().id, make().id);
    }

    #[test]
    fn test_id_depends_on_kind() {
        let as_fiche = IndexedDocument::new(
            DocKind::Fiche,
            "Tri des déchets".to_string(),
            "/page".to_string(),
            String::new(),
            "Tri des déchets".to_string(),
        );
        let as_ressource = IndexedDocument::new(
            DocKind::Ressource,
            "Tri des déchets".to_string(),
            "/page".to_string(),
            String::new(),
            "Tri des déchets".to_string(),
        );
        assert_ne!(as_fiche.id, as_ressource.id);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(DocKind::Fiche.as_str(), "fiche");
        assert_eq!(DocKind::Fiche.label(), "FICHE");
        assert_eq!(DocKind::Home.label(), "HOME");
    }
}
