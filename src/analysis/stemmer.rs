// file: src/analysis/stemmer.rs
// description: rule-based french suffix stripping, no dictionary
// reference: porter-style suffix stemming, simplified

/// Ordered suffix rules, tried top to bottom. Each rule fires at most once,
/// against the result of the previous rule, so a token can lose several
/// suffixes in one pass ("éclairement" -> "éclair" -> "écla").
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("ement", ""),
    ("ation", ""),
    ("tion", ""),
    ("ique", ""),
    ("eur", ""),
    ("euse", ""),
    ("ment", ""),
    ("er", ""),
    ("ir", ""),
    ("ant", ""),
    ("ent", ""),
    ("aux", "al"),
    ("s", ""),
];

/// Tokens below this length are returned as-is.
const MIN_STEM_LEN: usize = 4;

/// Approximate morphological root of a french token. Purely syntactic: it
/// over-strips and under-strips on purpose, which is fine because stems are
/// only ever compared with other stems produced by the same function.
pub fn stem(token: &str) -> String {
    if token.chars().count() < MIN_STEM_LEN {
        return token.to_string();
    }

    let mut stemmed = token.to_string();
    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(base) = stemmed.strip_suffix(suffix) {
            stemmed = format!("{base}{replacement}");
        }
    }
    stemmed
}

/// Stems for a whole token sequence, in order.
pub fn stem_all(tokens: &[String]) -> Vec<String> {
    tokens.iter().map(|token| stem(token)).collect()
}
