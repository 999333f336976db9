// file: src/search/scorer.rs
// description: weighted multi-field relevance scoring
// reference: lexical field-boost scoring

use crate::analysis::{stem, stem_all, tokenize};
use crate::models::{DocKind, IndexedDocument, ScoredMatch};
use std::collections::HashSet;

/// Scoring weights. Title outranks summary outranks body, exact outranks
/// stemmed, and synonym matches stay below every direct match.
#[derive(Debug, Clone)]
pub struct ScoreWeights {
    pub title_exact: f64,
    pub title_stem: f64,
    pub summary_exact: f64,
    pub summary_stem: f64,
    pub synonym_title: f64,
    pub synonym_summary: f64,
    /// Flat bonus for fiches, the editorially richest kind.
    pub fiche_bonus: f64,
    pub density_scale: f64,
    pub density_cap: f64,
    /// Every query token matched the title.
    pub full_title_bonus: f64,
    /// Every query token matched the title or the summary.
    pub title_summary_bonus: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_exact: 15.0,
            title_stem: 10.0,
            summary_exact: 8.0,
            summary_stem: 5.0,
            synonym_title: 3.0,
            synonym_summary: 2.0,
            fiche_bonus: 2.0,
            density_scale: 2.0,
            density_cap: 6.0,
            full_title_bonus: 10.0,
            title_summary_bonus: 5.0,
        }
    }
}

/// Score one document against a query. `query_tokens` are the original
/// (stop-word filtered) tokens, `expanded` the synonym expansion superset.
/// Documents with an empty body never score; a zero score yields `None`.
pub fn score_document<'a>(
    doc: &'a IndexedDocument,
    query_tokens: &[String],
    expanded: &HashSet<String>,
    weights: &ScoreWeights,
) -> Option<ScoredMatch<'a>> {
    let body_tokens = tokenize(&doc.body);
    if body_tokens.is_empty() {
        return None;
    }
    let body_stems = stem_all(&body_tokens);

    let title_tokens = tokenize(&doc.title);
    let title_stems = stem_all(&title_tokens);
    let summary_tokens = tokenize(&doc.summary);
    let summary_stems = stem_all(&summary_tokens);

    let mut score = 0.0;
    let mut title_matches = 0;
    let mut summary_matches = 0;
    let mut content_matches = 0;

    if doc.kind == DocKind::Fiche {
        score += weights.fiche_bonus;
    }

    // Original query tokens carry the strong signals. Exact and stemmed
    // matches are exclusive per field: a token scores one of the two.
    for token in query_tokens {
        let token_stem = stem(token);

        if title_tokens.iter().any(|t| t == token) {
            score += weights.title_exact;
            title_matches += 1;
        } else if title_stems.iter().any(|ts| *ts == token_stem) {
            score += weights.title_stem;
            title_matches += 1;
        }

        if summary_tokens.iter().any(|t| t == token) {
            score += weights.summary_exact;
            summary_matches += 1;
        } else if summary_stems.iter().any(|ss| *ss == token_stem) {
            score += weights.summary_stem;
            summary_matches += 1;
        }

        let occurrences = count_occurrences(token, &token_stem, &body_tokens, &body_stems);
        if occurrences > 0 {
            // occurrences per thousand body tokens, saturating so long or
            // repetitive documents cannot dominate
            let density = occurrences as f64 / body_tokens.len() as f64 * 1000.0;
            score += (density * weights.density_scale).min(weights.density_cap);
            content_matches += 1;
        }
    }

    // Synonym tokens only nudge the score and never touch the match
    // counters, so coherence stays a statement about the user's own words.
    for token in expanded {
        if query_tokens.contains(token) {
            continue;
        }
        let token_stem = stem(token);

        if title_tokens.iter().any(|t| t == token)
            || title_stems.iter().any(|ts| *ts == token_stem)
        {
            score += weights.synonym_title;
        }
        if summary_tokens.iter().any(|t| t == token)
            || summary_stems.iter().any(|ss| *ss == token_stem)
        {
            score += weights.synonym_summary;
        }
    }

    if !query_tokens.is_empty() && title_matches >= query_tokens.len() {
        score += weights.full_title_bonus;
    }
    if !query_tokens.is_empty() && title_matches + summary_matches >= query_tokens.len() {
        score += weights.title_summary_bonus;
    }

    (score > 0.0).then_some(ScoredMatch {
        document: doc,
        score,
        title_matches,
        summary_matches,
        content_matches,
    })
}

/// Positions in `tokens` matching the query token verbatim or by stem.
fn count_occurrences(token: &str, token_stem: &str, tokens: &[String], stems: &[String]) -> usize {
    tokens
        .iter()
        .zip(stems)
        .filter(|(t, s)| t.as_str() == token || s.as_str() == token_stem)
        .count()
}
