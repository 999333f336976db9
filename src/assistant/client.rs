// file: src/assistant/client.rs
// description: OpenAI-compatible chat completions client
// reference: https://platform.openai.com/docs/api-reference/chat

use crate::config::AssistantConfig;
use crate::error::{AssistError, Result};
use crate::models::ChatMessage;
use crate::utils::Validator;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

pub struct ChatClient {
    client: Client,
    api_base: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatClient {
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        Validator::validate_url(&config.api_base)?;

        let api_key = config.api_key.clone().ok_or_else(|| {
            AssistError::Config(
                "no API key configured (set OPENAI_API_KEY or assistant.api_key)".to_string(),
            )
        })?;

        Ok(Self {
            client: Client::new(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Sends the system prompt and conversation turns, returns the answer
    /// text of the first choice.
    pub async fn complete(&self, system: &str, turns: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base);

        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages.push(ApiMessage {
            role: "system",
            content: system,
        });
        for turn in turns {
            messages.push(ApiMessage {
                role: turn.role.as_str(),
                content: &turn.content,
            });
        }

        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(
            "Requesting completion from {} with {} messages",
            url,
            turns.len() + 1
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistError::Api(format!("Failed to send chat request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AssistError::Api(format!(
                "Chat request failed with status {}: {}",
                status,
                Validator::truncate_text(&error_text, 200)
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AssistError::Api(format!("Failed to parse chat response: {}", e)))?;

        match completion.choices.into_iter().next() {
            Some(choice) => Ok(choice.message.content.unwrap_or_default()),
            None => Err(AssistError::Api(
                "Chat API returned no choices".to_string(),
            )),
        }
    }
}
