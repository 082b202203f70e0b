//! OpenAI-compatible adapter for the roundup summary.
//!
//! Supports OpenAI API, Azure OpenAI, and local Ollama instances.
//! Implements `SummarizerPort` with a single chat-completions request per call.

use crate::domain::{AggregateText, DomainError, Instruction, Summary};
use crate::ports::SummarizerPort;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

/// OpenAI-compatible summarizer.
///
/// Can be configured to work with:
/// - OpenAI API (api.openai.com)
/// - Azure OpenAI
/// - Ollama (localhost)
/// - Any OpenAI-compatible API
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - API key, sent as a Bearer token
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `max_tokens` - Completion budget for the summary
    /// * `timeout` - Request timeout
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        max_tokens: u32,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
            max_tokens,
        })
    }

    fn build_request(&self, instruction: &Instruction, aggregate: &AggregateText) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: instruction.system().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: instruction.user_message(aggregate),
                },
            ],
            max_tokens: self.max_tokens,
        }
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    /// Null when the model refuses or only emits tool calls.
    content: Option<String>,
}

#[async_trait::async_trait]
impl SummarizerPort for OpenAiAdapter {
    async fn summarize(
        &self,
        instruction: &Instruction,
        aggregate: &AggregateText,
    ) -> Result<Summary, DomainError> {
        info!(
            model = %self.model,
            items = aggregate.item_count(),
            context_len = aggregate.as_str().len(),
            "sending aggregate to AI for summarization"
        );

        let request = self.build_request(instruction, aggregate);

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::Summarization(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "AI API returned error");
            return Err(DomainError::Summarization(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            DomainError::Summarization(format!("Failed to parse API response: {}", e))
        })?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| DomainError::Summarization("No response content returned".to_string()))?;

        debug!(raw_len = content.len(), "received AI response");
        info!(summary_len = content.len(), "summarization complete");

        Ok(Summary::new(content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeWindow;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter(server: &MockServer) -> OpenAiAdapter {
        OpenAiAdapter::new(
            format!("{}/v1/chat/completions", server.uri()),
            "sk-test".to_string(),
            "gpt-4o-mini".to_string(),
            2500,
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn aggregate() -> AggregateText {
        AggregateText::new(
            "[1] r/television | 10 upvotes, 2 comments\nShow X renewed\nFans react positively"
                .to_string(),
            1,
        )
    }

    #[tokio::test]
    async fn test_summarize_sends_system_and_user_messages() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "max_tokens": 2500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": "  - **Show X** renewed\n"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let instruction = Instruction::pop_culture_roundup(TimeWindow::Week);
        let summary = adapter(&server)
            .summarize(&instruction, &aggregate())
            .await
            .unwrap();

        // Returned unchanged, surrounding whitespace included.
        assert_eq!(summary.as_str(), "  - **Show X** renewed\n");

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], instruction.system());
        assert_eq!(body["messages"][1]["role"], "user");
        assert!(
            body["messages"][1]["content"]
                .as_str()
                .unwrap()
                .contains("Show X renewed")
        );
    }

    #[tokio::test]
    async fn test_error_status_is_summarization_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"error": "invalid_api_key"}"#),
            )
            .mount(&server)
            .await;

        let err = adapter(&server)
            .summarize(&Instruction::pop_culture_roundup(TimeWindow::Week), &aggregate())
            .await
            .unwrap_err();
        match err {
            DomainError::Summarization(msg) => {
                assert!(msg.contains("401"));
                assert!(msg.contains("invalid_api_key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_choices_is_summarization_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})),
            )
            .mount(&server)
            .await;

        let err = adapter(&server)
            .summarize(&Instruction::pop_culture_roundup(TimeWindow::Week), &aggregate())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Summarization(_)));
    }

    #[tokio::test]
    async fn test_null_content_is_summarization_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {"role": "assistant", "content": null}}]
            })))
            .mount(&server)
            .await;

        let err = adapter(&server)
            .summarize(&Instruction::pop_culture_roundup(TimeWindow::Week), &aggregate())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Summarization(_)));
    }
}
