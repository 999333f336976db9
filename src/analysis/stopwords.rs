// file: src/analysis/stopwords.rs
// description: french stop-word set and query token filtering
// reference: corpus-specific grammatical word list

use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    /// Grammatical words plus vague query filler ("sujet", "aide") that carry
    /// no ranking signal for this corpus.
    pub static ref STOP_WORDS: HashSet<&'static str> = [
        // pronouns
        "je", "tu", "il", "elle", "nous", "vous", "ils", "elles",
        // articles
        "le", "la", "les", "un", "une", "des", "du", "de", "ce", "cette", "ces",
        // possessives
        "mon", "ton", "son", "notre", "votre", "leur",
        // relatives
        "qui", "que", "quoi", "dont", "où",
        // conjunctions and prepositions
        "et", "ou", "mais", "donc", "car", "ni", "pour", "par", "sur", "sous",
        "avec", "sans", "dans", "entre",
        // auxiliary and modal verbs
        "être", "avoir", "faire", "pouvoir", "vouloir", "devoir", "savoir", "aller",
        "est", "sont", "était", "ont", "fait", "peut", "veut", "doit", "sait", "vais",
        // adverbs and quantifiers
        "plus", "moins", "très", "bien", "tout", "tous", "toute", "toutes",
        // interrogatives
        "comment", "pourquoi", "quand", "combien",
        // conversational filler
        "sujet", "sujets", "thème", "thèmes", "proposer", "aide", "aider",
    ]
    .into_iter()
    .collect();
}

/// Drop stop words and anything shorter than three characters. Order and
/// duplicates of the surviving tokens are preserved.
pub fn filter_stop_words(tokens: &[String]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| !STOP_WORDS.contains(token.as_str()) && token.chars().count() > 2)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_filters_stop_words() {
        let tokens = toks(&["comment", "financer", "une", "rénovation"]);
        assert_eq!(filter_stop_words(&tokens), toks(&["financer", "rénovation"]));
    }

    #[test]
    fn test_filters_accented_stop_words() {
        let tokens = toks(&["être", "où", "très", "énergie"]);
        assert_eq!(filter_stop_words(&tokens), toks(&["énergie"]));
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        let tokens = toks(&["budget", "climat", "budget"]);
        assert_eq!(
            filter_stop_words(&tokens),
            toks(&["budget", "climat", "budget"])
        );
    }

    #[test]
    fn test_all_stop_words_yields_empty() {
        let tokens = toks(&["comment", "faire", "pour", "bien", "aider"]);
        assert!(filter_stop_words(&tokens).is_empty());
    }

    #[test]
    fn test_conversational_filler_is_filtered() {
        let tokens = toks(&["proposer", "des", "sujets", "climat"]);
        assert_eq!(filter_stop_words(&tokens), toks(&["climat"]));
    }
}
