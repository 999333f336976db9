// file: src/assistant/service.rs
// description: assistant orchestration of retrieval, context and generation
// reference: request flow of the deployed chat endpoint

use crate::assistant::client::ChatClient;
use crate::assistant::context::build_context;
use crate::assistant::prompt;
use crate::error::Result;
use crate::models::{AssistantReply, ChatMessage, ChatRole};
use crate::search::SearchEngine;
use crate::utils::{OperationTimer, Validator};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

const SLOW_ROUND_TRIP: Duration = Duration::from_secs(10);

/// Ties the search engine to the chat client. One instance serves the whole
/// process; both members are read-only after construction.
pub struct Assistant {
    engine: SearchEngine,
    client: ChatClient,
}

impl Assistant {
    pub fn new(engine: SearchEngine, client: ChatClient) -> Self {
        Self { engine, client }
    }

    /// One grounded round trip: retrieve over the history plus the new
    /// message, render the context block, call the model.
    pub async fn ask(&self, history: &[ChatMessage], message: &str) -> Result<AssistantReply> {
        Validator::validate_content_not_empty(message)?;
        let message = message.trim();

        let request_id = Uuid::new_v4();
        let timer = OperationTimer::new("assistant round trip");

        let query = search_query(history, message);
        let result = self.engine.search(&query, self.engine.default_top_k());

        info!(
            %request_id,
            docs = result.documents.len(),
            has_relevant = result.has_relevant_results,
            top_score = result.top_score,
            "retrieval for \"{}\"",
            Validator::truncate_text(message, 50)
        );

        let context = build_context(&result.documents);
        let system = prompt::system_prompt(result.has_relevant_results);
        let turns =
            prompt::conversation(history, prompt::grounded_question(&context.text, message));

        let answer = self.client.complete(&system, &turns).await?;
        timer.warn_if_slow(SLOW_ROUND_TRIP, "chat completion");
        timer.finish();

        Ok(AssistantReply {
            answer,
            sources: context.sources,
            has_relevant_results: result.has_relevant_results,
        })
    }
}

/// Prior user turns joined with the new message, so follow-up questions keep
/// their earlier subject during retrieval.
fn search_query(history: &[ChatMessage], message: &str) -> String {
    history
        .iter()
        .filter(|m| m.role == ChatRole::User)
        .map(|m| m.content.as_str())
        .chain(std::iter::once(message))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::corpus::Corpus;
    use crate::error::AssistError;
    use crate::search::DocumentIndex;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_query_includes_history_user_turns() {
        let history = vec![
            ChatMessage::user("rénovation des bâtiments"),
            ChatMessage::assistant("Voici une fiche."),
            ChatMessage::user("et le financement ?"),
        ];

        let query = search_query(&history, "pour une petite commune");
        assert_eq!(
            query,
            "rénovation des bâtiments et le financement ? pour une petite commune"
        );
    }

    #[test]
    fn test_search_query_without_history() {
        assert_eq!(search_query(&[], "isolation"), "isolation");
    }

    #[tokio::test]
    async fn test_ask_rejects_empty_message() {
        let mut config = Config::default_config();
        config.assistant.api_key = Some("sk-test".to_string());

        let engine = SearchEngine::new(DocumentIndex::build(&Corpus::default()), &config.search);
        let client = ChatClient::new(&config.assistant).unwrap();
        let assistant = Assistant::new(engine, client);

        let result = assistant.ask(&[], "   ").await;
        assert!(matches!(result, Err(AssistError::Validation(_))));
    }
}
