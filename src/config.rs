// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{AssistError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub search: SearchConfig,
    pub assistant: AssistantConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub top_k: usize,
    pub min_relevance_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: 5,
            min_relevance_score: 8.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    pub api_base: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TRANSITION_ASSIST")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| AssistError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| AssistError::Config(e.to_string()))?;

        if config.assistant.api_key.is_none() {
            config.assistant.api_key = std::env::var("OPENAI_API_KEY").ok();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            corpus: CorpusConfig {
                dir: PathBuf::from("doc"),
            },
            search: SearchConfig::default(),
            assistant: AssistantConfig {
                api_base: "https://api.openai.com/v1".to_string(),
                model: "gpt-4.1-mini".to_string(),
                temperature: 0.3,
                max_tokens: 500,
                api_key: None,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("export"),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.search.top_k == 0 {
            return Err(AssistError::Config(
                "top_k must be greater than 0".to_string(),
            ));
        }

        if !self.search.min_relevance_score.is_finite() || self.search.min_relevance_score < 0.0 {
            return Err(AssistError::Config(
                "min_relevance_score must be a non-negative number".to_string(),
            ));
        }

        if self.assistant.max_tokens == 0 {
            return Err(AssistError::Config(
                "max_tokens must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
