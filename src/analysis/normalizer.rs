// file: src/analysis/normalizer.rs
// description: french text tokenization with accent-preserving normalization
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Everything that is not a lowercase letter (accented french letters
    // included), a digit or whitespace. Input is lowercased first, so the
    // class needs no uppercase range.
    static ref NON_WORD: Regex = Regex::new(
        r"[^a-zàâçéèêëîïôûùüÿñæœ0-9\s]"
    ).expect("NON_WORD regex is valid");
}

/// Minimum token length kept after splitting. Two-letter fragments are almost
/// always articles or leftovers of elision ("l'", "d'").
const MIN_TOKEN_LEN: usize = 3;

/// Split text into lowercase tokens. Punctuation becomes whitespace, accented
/// characters survive, tokens shorter than three characters are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(|token| token.to_string())
        .collect()
}
