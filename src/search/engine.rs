// file: src/search/engine.rs
// description: retrieval pipeline tying analysis, scoring and ranking together
// reference: internal module structure

use crate::analysis::{expand_query, filter_stop_words, tokenize};
use crate::config::SearchConfig;
use crate::models::{QueryResult, ScoredMatch};
use crate::search::index::DocumentIndex;
use crate::search::ranker::rank;
use crate::search::scorer::{ScoreWeights, score_document};
use crate::utils::validation::Validator;
use std::cmp::Ordering;
use tracing::debug;

/// Query pipeline over the immutable index. Holds no per-query state, so one
/// engine can serve any number of callers concurrently.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    index: DocumentIndex,
    weights: ScoreWeights,
    min_score: f64,
    default_top_k: usize,
}

impl SearchEngine {
    pub fn new(index: DocumentIndex, config: &SearchConfig) -> Self {
        Self {
            index,
            weights: ScoreWeights::default(),
            min_score: config.min_relevance_score,
            default_top_k: config.top_k,
        }
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }

    /// One full retrieval round: normalize and filter the query, expand it,
    /// score every document, rank and threshold.
    pub fn search(&self, query: &str, top_k: usize) -> QueryResult {
        let matches = self.scored_matches(query);

        if !matches.is_empty() {
            let preview: Vec<String> = matches
                .iter()
                .take(5)
                .map(|m| {
                    format!(
                        "{} ({:.1})",
                        Validator::truncate_text(&m.document.title, 40),
                        m.score
                    )
                })
                .collect();
            let above = matches.iter().filter(|m| m.score >= self.min_score).count();
            debug!(top = ?preview, above_threshold = above, min_score = self.min_score, "ranking");
        }

        rank(matches, top_k, self.min_score)
    }

    /// Every document that scored for this query, best first, before the
    /// threshold is applied. Used by `search` and by score listings.
    pub fn scored_matches(&self, query: &str) -> Vec<ScoredMatch<'_>> {
        let query_tokens = filter_stop_words(&tokenize(query));
        if query_tokens.is_empty() {
            debug!("query reduced to nothing after stop-word filtering");
            return Vec::new();
        }

        let expanded = expand_query(&query_tokens);
        debug!(tokens = ?query_tokens, expanded = expanded.len(), "query analyzed");

        let mut matches: Vec<ScoredMatch<'_>> = self
            .index
            .documents()
            .iter()
            .filter_map(|doc| score_document(doc, &query_tokens, &expanded, &self.weights))
            .collect();

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::models::PageRecord;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn record(title: &str, resume: &str, url: &str, paragraphs: &[&str]) -> PageRecord {
        PageRecord {
            title: Some(title.to_string()),
            resume: (!resume.is_empty()).then(|| resume.to_string()),
            url: Some(url.to_string()),
            paragraphs: Some(paragraphs.iter().map(|p| p.to_string()).collect()),
        }
    }

    fn engine_over(corpus: &Corpus) -> SearchEngine {
        SearchEngine::new(DocumentIndex::build(corpus), &SearchConfig::default())
    }

    /// A fiche about funding energy retrofits: "financement" appears five
    /// times across a body of roughly fifty tokens.
    fn funding_fiche() -> PageRecord {
        record(
            "Financer la rénovation énergétique",
            "Aides et subventions disponibles",
            "/fiches/financer-renovation",
            &[
                "Le financement des travaux reste la première question des communes.",
                "Plusieurs dispositifs de financement existent, du financement public \
                 aux prêts bonifiés.",
                "Monter un dossier de financement demande du temps, mais chaque \
                 financement obtenu sécurise le projet.",
            ],
        )
    }

    fn sustainability_corpus() -> Corpus {
        Corpus {
            fiches: vec![
                funding_fiche(),
                record(
                    "Développer les pistes cyclables",
                    "Encourager le vélo au quotidien",
                    "/fiches/pistes-cyclables",
                    &["Le vélo réduit les émissions des déplacements courts."],
                ),
            ],
            ressources: vec![record(
                "Annuaire des aides locales",
                "Où trouver un financement adapté",
                "/ressources/annuaire-aides",
                &["Un annuaire des dispositifs de financement pour les communes."],
            )],
            faq: None,
            home: None,
        }
    }

    #[test]
    fn test_direct_hit_ranks_first() {
        let corpus = sustainability_corpus();
        let engine = engine_over(&corpus);

        let result = engine.search("financement rénovation", 5);
        assert!(result.has_relevant_results);
        assert!(result.top_score > 8.0);
        assert_eq!(
            result.documents[0].title,
            "Financer la rénovation énergétique"
        );
    }

    #[test]
    fn test_synonym_reaches_related_document() {
        let corpus = Corpus {
            fiches: vec![funding_fiche()],
            ressources: Vec::new(),
            faq: None,
            home: None,
        };
        let engine = engine_over(&corpus);

        // no document contains "dotation"; the funding fiche surfaces
        // through the synonym group alone
        let via_synonym = engine.search("dotation", 5);
        assert!(via_synonym.has_relevant_results);
        assert_eq!(
            via_synonym.documents[0].title,
            "Financer la rénovation énergétique"
        );

        // a direct title hit scores strictly higher than the synonym route
        let direct = engine.search("financer", 5);
        assert!(direct.top_score > via_synonym.top_score);
    }

    #[test]
    fn test_no_overlap_yields_no_results() {
        let corpus = Corpus {
            fiches: vec![record(
                "Développer les pistes cyclables",
                "Encourager le vélo",
                "/fiches/velo",
                &["Le vélo au quotidien pour les déplacements courts."],
            )],
            ressources: Vec::new(),
            faq: None,
            home: None,
        };
        let engine = engine_over(&corpus);

        let result = engine.search("budget", 5);
        assert!(!result.has_relevant_results);
        assert!(result.documents.is_empty());

        let result = engine.search("recette de cuisine", 5);
        assert!(!result.has_relevant_results);
        assert!(result.documents.is_empty());
    }

    #[test]
    fn test_empty_query_law() {
        let corpus = sustainability_corpus();
        let engine = engine_over(&corpus);

        for query in ["", "   ", "?!...", "le la les", "comment faire pour bien"] {
            let result = engine.search(query, 5);
            assert!(result.documents.is_empty(), "query {query:?}");
            assert!(!result.has_relevant_results, "query {query:?}");
            assert_eq!(result.top_score, 0.0, "query {query:?}");
        }
    }

    #[test]
    fn test_top_k_bound() {
        let corpus = Corpus {
            fiches: (0..8)
                .map(|i| {
                    record(
                        "Rénovation énergétique",
                        "",
                        &format!("/fiches/renovation-{i}"),
                        &["Un chantier de rénovation énergétique."],
                    )
                })
                .collect(),
            ressources: Vec::new(),
            faq: None,
            home: None,
        };
        let engine = engine_over(&corpus);

        let result = engine.search("rénovation", 3);
        assert_eq!(result.documents.len(), 3);
        assert!(result.has_relevant_results);
    }

    #[test]
    fn test_stop_words_do_not_change_ranking() {
        let corpus = sustainability_corpus();
        let engine = engine_over(&corpus);

        let bare = engine.search("financement rénovation", 5);
        let padded = engine.search("comment est le financement pour la rénovation", 5);

        let bare_ids: Vec<&str> = bare.documents.iter().map(|d| d.id.as_str()).collect();
        let padded_ids: Vec<&str> = padded.documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(bare_ids, padded_ids);
        assert_eq!(bare.top_score, padded.top_score);
    }

    #[test]
    fn test_scored_matches_sorted_and_unfiltered() {
        let corpus = sustainability_corpus();
        let engine = engine_over(&corpus);

        let matches = engine.scored_matches("financement");
        assert!(!matches.is_empty());
        for pair in matches.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // scored_matches keeps sub-threshold entries that search would drop
        let result = engine.search("financement", 5);
        assert!(matches.len() >= result.documents.len());
    }

    #[test]
    fn test_empty_index() {
        let engine = engine_over(&Corpus::default());
        let result = engine.search("financement", 5);
        assert!(result.documents.is_empty());
        assert!(!result.has_relevant_results);
        assert_eq!(result.top_score, 0.0);
    }

    proptest! {
        // queries made only of stop words, short fragments, punctuation or
        // whitespace never reach the scorer
        #[test]
        fn prop_degenerate_queries_return_empty(
            words in proptest::collection::vec(
                proptest::sample::select(vec![
                    "le", "la", "les", "de", "du", "et", "ou", "un", "une",
                    "est", "ab", "xy", "?!", "...", "",
                ]),
                0..10,
            )
        ) {
            let corpus = sustainability_corpus();
            let engine = engine_over(&corpus);

            let result = engine.search(&words.join(" "), 5);
            prop_assert!(result.documents.is_empty());
            prop_assert!(!result.has_relevant_results);
            prop_assert_eq!(result.top_score, 0.0);
        }

        // appending stop words to a real query never changes the outcome
        #[test]
        fn prop_stop_word_padding_is_neutral(
            padding in proptest::collection::vec(
                proptest::sample::select(vec![
                    "le", "la", "les", "pour", "avec", "comment", "est", "très",
                ]),
                0..6,
            )
        ) {
            let corpus = sustainability_corpus();
            let engine = engine_over(&corpus);

            let bare = engine.search("financement rénovation", 5);
            let padded_query = format!("financement {} rénovation", padding.join(" "));
            let padded = engine.search(&padded_query, 5);

            let bare_ids: Vec<&str> = bare.documents.iter().map(|d| d.id.as_str()).collect();
            let padded_ids: Vec<&str> = padded.documents.iter().map(|d| d.id.as_str()).collect();
            prop_assert_eq!(bare_ids, padded_ids);
            prop_assert_eq!(bare.top_score, padded.top_score);
        }
    }
}
