// file: src/exporter/json.rs
// description: json export of the indexed corpus
// reference: site export layout

use crate::error::{AssistError, Result};
use crate::models::IndexedDocument;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportManifest {
    pub exported_at: String,
    pub total_documents: usize,
    pub files: Vec<String>,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes one pretty-printed JSON file per document plus a manifest
    /// listing them. Returns the manifest.
    pub fn export_documents(&self, documents: &[IndexedDocument]) -> Result<ExportManifest> {
        info!("Starting JSON export to {:?}", self.output_dir);

        let mut files = Vec::with_capacity(documents.len());
        for doc in documents {
            let filename = format!("doc_{}.json", doc.short_id());
            let payload = serde_json::to_string_pretty(doc)
                .map_err(|e| AssistError::Serialization(e.to_string()))?;
            fs::write(self.output_dir.join(&filename), payload)?;
            files.push(filename);
        }

        let manifest = ExportManifest {
            exported_at: Utc::now().to_rfc3339(),
            total_documents: documents.len(),
            files,
        };

        let payload = serde_json::to_string_pretty(&manifest)
            .map_err(|e| AssistError::Serialization(e.to_string()))?;
        fs::write(self.output_dir.join(MANIFEST_FILE), payload)?;

        info!(
            "Export complete: {} documents exported",
            manifest.total_documents
        );
        Ok(manifest)
    }
}
