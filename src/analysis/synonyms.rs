// file: src/analysis/synonyms.rs
// description: domain synonym groups and one-level query expansion
// reference: solutions transitions editorial vocabulary

use crate::analysis::stemmer::stem;
use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Topic groups keyed by a canonical domain term. Matching a key or any
    /// of its synonyms pulls the whole group into the query.
    pub static ref SYNONYMS: HashMap<&'static str, &'static [&'static str]> = {
        let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        map.insert("financement", &[
            "financer", "financier", "budget", "subvention", "dotation",
            "emprunt", "dette", "investissement", "fonds", "aides",
        ]);
        map.insert("formation", &[
            "former", "cnfpt", "compétences", "apprentissage", "sensibilisation",
        ]);
        map.insert("budget", &[
            "budgétaire", "finances", "financier", "dépenses", "recettes", "comptabilité",
        ]);
        map.insert("énergie", &[
            "énergétique", "électricité", "chauffage", "rénovation", "thermique",
        ]);
        map.insert("climat", &[
            "climatique", "carbone", "émissions", "ges", "décarbonation",
        ]);
        map.insert("mobilité", &[
            "transport", "vélo", "voiture", "déplacement", "circulation",
        ]);
        map.insert("biodiversité", &[
            "nature", "espèces", "écosystème", "faune", "flore",
        ]);
        map.insert("eau", &[
            "hydraulique", "assainissement", "potable", "aquatique",
        ]);
        map.insert("déchet", &[
            "déchets", "recyclage", "tri", "ordures", "compost",
        ]);
        map.insert("bâtiment", &[
            "bâti", "patrimoine", "immobilier", "construction", "rénovation",
        ]);
        map
    };
}

/// Expand query tokens with their synonym groups. A token activates a group
/// when it equals the key or one of the synonyms, exactly or by stem. The
/// whole group (key included) joins the result. One level only: words added
/// here are never expanded themselves.
pub fn expand_query(tokens: &[String]) -> HashSet<String> {
    let mut expanded: HashSet<String> = tokens.iter().cloned().collect();

    for token in tokens {
        let token_stem = stem(token);
        for (key, synonyms) in SYNONYMS.iter() {
            let key_hit = *key == token.as_str() || stem(key) == token_stem;
            let synonym_hit = synonyms
                .iter()
                .any(|s| *s == token.as_str() || stem(s) == token_stem);

            if key_hit || synonym_hit {
                expanded.insert((*key).to_string());
                expanded.extend(synonyms.iter().map(|s| s.to_string()));
            }
        }
    }

    expanded
}
