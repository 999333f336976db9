// file: src/corpus/loader.rs
// description: corpus loading from the site JSON exports
// reference: solutions transitions export layout

use crate::error::{AssistError, Result};
use crate::models::PageRecord;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub const FICHES_FILE: &str = "fiches.json";
pub const RESSOURCES_FILE: &str = "ressources.json";
pub const FAQ_FILE: &str = "faq.json";
pub const HOME_FILE: &str = "home.json";

/// The raw corpus as shipped next to the site: two listing collections and
/// two optional singleton pages. Loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub fiches: Vec<PageRecord>,
    pub ressources: Vec<PageRecord>,
    pub faq: Option<PageRecord>,
    pub home: Option<PageRecord>,
}

impl Corpus {
    /// Read the four corpus files from `dir`. A missing file is an empty
    /// collection, a present but unparseable file is an error: absent data is
    /// normal between exports, corrupt data should fail at startup.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let fiches = load_collection(&dir.join(FICHES_FILE))?;
        let ressources = load_collection(&dir.join(RESSOURCES_FILE))?;
        let faq = load_page(&dir.join(FAQ_FILE))?;
        let home = load_page(&dir.join(HOME_FILE))?;

        let corpus = Self {
            fiches,
            ressources,
            faq,
            home,
        };

        info!(
            fiches = corpus.fiches.len(),
            ressources = corpus.ressources.len(),
            faq = corpus.faq.is_some(),
            home = corpus.home.is_some(),
            "corpus loaded"
        );

        Ok(corpus)
    }

    pub fn record_count(&self) -> usize {
        self.fiches.len()
            + self.ressources.len()
            + usize::from(self.faq.is_some())
            + usize::from(self.home.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

fn load_collection(path: &Path) -> Result<Vec<PageRecord>> {
    if !path.exists() {
        warn!(path = %path.display(), "corpus file missing, treating as empty");
        return Ok(Vec::new());
    }

    let raw = read_file(path)?;
    // a file holding `null` counts as absent, same as a missing file
    let records: Option<Vec<PageRecord>> = parse_json(path, &raw)?;
    Ok(records.unwrap_or_default())
}

fn load_page(path: &Path) -> Result<Option<PageRecord>> {
    if !path.exists() {
        warn!(path = %path.display(), "corpus file missing, treating as absent");
        return Ok(None);
    }

    let raw = read_file(path)?;
    parse_json(path, &raw)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AssistError::FileOperation {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, raw: &str) -> Result<T> {
    serde_json::from_str(raw)
        .map_err(|e| AssistError::Serialization(format!("{}: {e}", path.display())))
}
