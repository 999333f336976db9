// file: src/models/record.rs
// description: raw corpus entry as deserialized from the site JSON exports
// reference: solutions transitions corpus schema

use serde::{Deserialize, Serialize};

/// One entry of the scraped corpus. Every field is optional: the export
/// pipeline upstream drops fields it could not extract, and a record with
/// holes must still index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageRecord {
    #[serde(default)]
    pub title: Option<String>,

    /// Short summary paragraph shown on listing pages.
    #[serde(default)]
    pub resume: Option<String>,

    #[serde(default)]
    pub url: Option<String>,

    /// Body paragraphs in page order.
    #[serde(default)]
    pub paragraphs: Option<Vec<String>>,
}

impl PageRecord {
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => fallback,
        }
    }
}
