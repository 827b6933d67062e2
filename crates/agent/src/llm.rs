use std::time::Duration;

use async_trait::async_trait;
use chatdesk_core::config::LlmConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const ERROR_BODY_LIMIT: usize = 512;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("llm client misconfigured: {0}")]
    Configuration(String),
    #[error("llm request failed: {0}")]
    Transport(String),
    #[error("llm service returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("llm response could not be decoded: {0}")]
    Decode(String),
}

/// Text-generation backend. One prompt in, one completion out.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Chat-completions client for OpenAI-compatible endpoints.
pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn from_config(config: &LlmConfig) -> Result<Self, GenerationError> {
        let api_key = config
            .api_key()
            .map_err(|err| GenerationError::Configuration(err.to_string()))?
            .clone();

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|err| GenerationError::Configuration(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: chat_completions_url(&config.base_url),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage { role: "user", content: prompt }],
        };

        debug!(
            event_name = "llm.request.sent",
            model = %self.model,
            prompt_chars = prompt.chars().count(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|err| GenerationError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|err| GenerationError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Status {
                status: status.as_u16(),
                body: truncate(&body, ERROR_BODY_LIMIT),
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|err| GenerationError::Decode(err.to_string()))?;
        let text = extract_text(parsed);

        debug!(
            event_name = "llm.response.received",
            completion_chars = text.chars().count(),
            "chat completion received"
        );
        Ok(text)
    }
}

fn chat_completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim().trim_end_matches('/'))
}

/// First choice's content; a reply with no choices or null content is empty text.
fn extract_text(response: ChatCompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}

fn truncate(value: &str, limit: usize) -> String {
    match value.char_indices().nth(limit) {
        Some((index, _)) => format!("{}...", &value[..index]),
        None => value.to_string(),
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use chatdesk_core::config::AppConfig;

    use super::{
        chat_completions_url, extract_text, truncate, ChatCompletionRequest,
        ChatCompletionResponse, ChatMessage, GenerationError, OpenAiClient,
    };

    fn parse(raw: &str) -> ChatCompletionResponse {
        serde_json::from_str(raw).expect("fixture should decode")
    }

    #[test]
    fn extracts_first_choice_content() {
        let response = parse(
            r#"{"choices":[{"message":{"role":"assistant","content":"Why did Ann cross the road?"}},
                           {"message":{"role":"assistant","content":"ignored"}}]}"#,
        );
        assert_eq!(extract_text(response), "Why did Ann cross the road?");
    }

    #[test]
    fn missing_choices_or_content_yield_empty_text() {
        assert_eq!(extract_text(parse(r#"{"choices":[]}"#)), "");
        assert_eq!(extract_text(parse(r#"{}"#)), "");
        assert_eq!(extract_text(parse(r#"{"choices":[{"message":{"content":null}}]}"#)), "");
    }

    #[test]
    fn request_body_matches_chat_completions_shape() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            temperature: 0.5,
            messages: vec![ChatMessage { role: "user", content: "Tell me a joke about Ann." }],
        };
        let value = serde_json::to_value(&request).expect("request serializes");

        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["temperature"], 0.5);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Tell me a joke about Ann.");
    }

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        assert_eq!(
            chat_completions_url("https://api.openai.com/v1/"),
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(
            chat_completions_url("http://localhost:8080/v1"),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn client_requires_api_key() {
        let config = AppConfig::default();
        let error = OpenAiClient::from_config(&config.llm).err().expect("no key configured");
        assert!(matches!(error, GenerationError::Configuration(_)));
    }

    #[test]
    fn client_uses_configured_model_and_endpoint() {
        let mut config = AppConfig::default();
        config.llm.api_key = Some("sk-test".to_string().into());
        config.llm.model = "gpt-4o-mini".to_string();

        let client = OpenAiClient::from_config(&config.llm).expect("client builds");
        assert_eq!(client.model(), "gpt-4o-mini");
        assert_eq!(client.endpoint(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn long_error_bodies_are_truncated() {
        let body = "x".repeat(600);
        let truncated = truncate(&body, 512);
        assert_eq!(truncated.len(), 515);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncate("short", 512), "short");
    }
}
