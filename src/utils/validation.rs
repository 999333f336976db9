// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{AssistError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(AssistError::Validation(format!(
                "Directory does not exist: {}",
                path.display()
            )));
        }

        if !path.is_dir() {
            return Err(AssistError::Validation(format!(
                "Path is not a directory: {}",
                path.display()
            )));
        }

        Ok(())
    }

    pub fn validate_content_not_empty(content: &str) -> Result<()> {
        if content.trim().is_empty() {
            return Err(AssistError::Validation("Content is empty".to_string()));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(AssistError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_top_k(top_k: usize) -> Result<()> {
        if top_k == 0 {
            return Err(AssistError::Validation(
                "top_k must be greater than 0".to_string(),
            ));
        }

        if top_k > 50 {
            return Err(AssistError::Validation(
                "top_k too large (max 50)".to_string(),
            ));
        }

        Ok(())
    }

    // counts chars, not bytes; corpus text is accented French
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if text.chars().count() <= max_chars {
            text.to_string()
        } else {
            let cut: String = text.chars().take(max_chars).collect();
            format!("{}...", cut)
        }
    }
}
