// file: src/assistant/context.rs
// description: renders retrieved documents into a citable context block
// reference: grounded generation over the corpus

use crate::models::{IndexedDocument, SourceRef};

/// Placeholder context when retrieval found nothing above the threshold. The
/// system prompt carries matching instructions for this case.
pub const EMPTY_CONTEXT: &str = "(AUCUN DOCUMENT PERTINENT TROUVÉ - voir instructions ci-dessous)";

/// Context text plus the source references it was rendered from, kept in the
/// same order so citations line up with the prompt.
#[derive(Debug, Clone)]
pub struct ContextBlock {
    pub text: String,
    pub sources: Vec<SourceRef>,
}

pub fn build_context(documents: &[IndexedDocument]) -> ContextBlock {
    if documents.is_empty() {
        return ContextBlock {
            text: EMPTY_CONTEXT.to_string(),
            sources: Vec::new(),
        };
    }

    let parts: Vec<String> = documents
        .iter()
        .map(|doc| {
            format!(
                "[{}] \"{}\"\nURL: {}\nContenu:\n{}",
                doc.kind.label(),
                doc.title,
                doc.url,
                doc.body
            )
        })
        .collect();

    ContextBlock {
        text: parts.join("\n\n"),
        sources: documents.iter().map(SourceRef::from_document).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocKind;
    use pretty_assertions::assert_eq;

    fn doc(kind: DocKind, title: &str) -> IndexedDocument {
        IndexedDocument::new(
            kind,
            title.to_string(),
            format!("/pages/{}", title.to_lowercase()),
            "Un résumé".to_string(),
            format!("{}\nUn résumé\nUn paragraphe.", title),
        )
    }

    #[test]
    fn test_single_document_block() {
        let docs = vec![doc(DocKind::Fiche, "Isolation")];
        let block = build_context(&docs);

        assert_eq!(
            block.text,
            "[FICHE] \"Isolation\"\nURL: /pages/isolation\nContenu:\nIsolation\nUn résumé\nUn paragraphe."
        );
        assert_eq!(block.sources.len(), 1);
        assert_eq!(block.sources[0].title, "Isolation");
    }

    #[test]
    fn test_documents_separated_by_blank_line() {
        let docs = vec![
            doc(DocKind::Fiche, "Isolation"),
            doc(DocKind::Ressource, "Annuaire"),
        ];
        let block = build_context(&docs);

        assert!(block.text.contains("Un paragraphe.\n\n[RESSOURCE]"));
        assert_eq!(block.sources.len(), 2);
        assert_eq!(block.sources[1].kind, DocKind::Ressource);
    }

    #[test]
    fn test_empty_retrieval_uses_placeholder() {
        let block = build_context(&[]);
        assert_eq!(block.text, EMPTY_CONTEXT);
        assert!(block.sources.is_empty());
    }

    #[test]
    fn test_sources_keep_document_order() {
        let docs = vec![
            doc(DocKind::Fiche, "Vélo"),
            doc(DocKind::Fiche, "Compost"),
            doc(DocKind::Faq, "FAQ"),
        ];
        let block = build_context(&docs);
        let titles: Vec<&str> = block.sources.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Vélo", "Compost", "FAQ"]);
    }
}
