//! OpenAI-compatible adapter for mood analysis.
//!
//! Talks to any endpoint that speaks the chat completions protocol with bearer
//! authentication (OpenAI itself, or a local server exposing the same API).
//! Implements `LanguageModelPort`; returns the raw content of the first choice
//! and leaves parsing to the classifier.

use crate::domain::DomainError;
use crate::ports::{CompletionRequest, LanguageModelPort};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Chat completions client. Sends `Authorization: Bearer <api_key>` on every call.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiAdapter {
    /// Create a new OpenAI adapter.
    ///
    /// # Arguments
    /// * `api_url` - API endpoint (e.g., "https://api.openai.com/v1/chat/completions")
    /// * `api_key` - Bearer token; the server only wires this adapter when one is set
    /// * `model` - Model name (e.g., "gpt-4o-mini", "llama3.2")
    /// * `timeout` - Whole-request timeout for the HTTP client
    pub fn new(
        api_url: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Internal(format!("HTTP client build failed: {}", e)))?;
        Ok(Self {
            client,
            api_url,
            api_key,
            model,
        })
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}

#[async_trait::async_trait]
impl LanguageModelPort for OpenAiAdapter {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, DomainError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %self.model, prompt_len = request.user.len(), "sending mood prompt to AI");

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Provider(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text.chars().take(200).collect::<String>(), "AI API returned error");
            return Err(DomainError::Provider(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Provider(format!("Failed to parse API response: {}", e)))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| DomainError::Provider("No content returned".to_string()))?;

        debug!(raw_len = content.len(), "received AI response");
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn adapter(server: &MockServer, timeout: Duration) -> OpenAiAdapter {
        OpenAiAdapter::new(
            format!("{}/v1/chat/completions", server.uri()),
            "sk-test".to_string(),
            "gpt-4o-mini".to_string(),
            timeout,
        )
        .unwrap()
    }

    fn request() -> CompletionRequest {
        CompletionRequest {
            system: "system".to_string(),
            user: "user".to_string(),
            temperature: 0.0,
            max_tokens: 200,
        }
    }

    #[tokio::test]
    async fn test_complete_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "temperature": 0.0,
                "max_tokens": 200,
                "messages": [
                    {"role": "system", "content": "system"},
                    {"role": "user", "content": "user"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "{\"emotion\":\"calm\"}"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let content = adapter(&server, Duration::from_secs(2))
            .complete(&request())
            .await
            .unwrap();
        assert_eq!(content, "{\"emotion\":\"calm\"}");
    }

    #[tokio::test]
    async fn test_complete_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let err = adapter(&server, Duration::from_secs(2))
            .complete(&request())
            .await
            .unwrap_err();
        match err {
            DomainError::Provider(msg) => {
                assert!(msg.contains("500"));
                assert!(msg.contains("upstream down"));
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_empty_choices_and_null_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": null}}]
            })))
            .mount(&server)
            .await;

        let adapter = adapter(&server, Duration::from_secs(2));
        assert!(matches!(
            adapter.complete(&request()).await,
            Err(DomainError::Provider(_))
        ));
        assert!(matches!(
            adapter.complete(&request()).await,
            Err(DomainError::Provider(_))
        ));
    }

    #[tokio::test]
    async fn test_complete_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"choices": []}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let err = adapter(&server, Duration::from_millis(50))
            .complete(&request())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Provider(_)));
    }

    #[tokio::test]
    async fn test_complete_unreachable() {
        let adapter = OpenAiAdapter::new(
            "http://127.0.0.1:9/v1/chat/completions".to_string(),
            String::new(),
            "gpt-4o-mini".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        assert!(matches!(
            adapter.complete(&request()).await,
            Err(DomainError::Provider(_))
        ));
    }
}
