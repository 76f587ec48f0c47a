/// LLM Client — the single point of entry for hosted text-generation calls.
///
/// Talks to the Together.ai chat completions API using the key the user
/// typed into the form. The key is only held for the duration of one call.
///
/// One attempt per request: failures are returned to the caller, never retried.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod models;

pub use models::ModelId;

pub const TOGETHER_API_URL: &str = "https://api.together.xyz/v1";
const MAX_TOKENS: u32 = 3000;
const TEMPERATURE: f32 = 0.8;
const TOP_P: f32 = 0.9;
const REPETITION_PENALTY: f32 = 1.1;
const STOP_SEQUENCES: [&str; 2] = ["<|im_end|>", "<|endoftext|>"];

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No content generated by API")]
    EmptyContent,
}

/// Anything that turns a prompt into generated text.
/// Carried in `AppState` as `Arc<dyn TextGenerator>`.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, model: ModelId, api_key: &str)
        -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
    repetition_penalty: f32,
    stop: &'a [&'a str],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Trimmed text of the first choice, if it has any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Together.ai chat completions client.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    base_url: String,
}

impl LlmClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().build()?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Makes one call to the chat completions endpoint and returns the parsed body.
    pub async fn call(
        &self,
        prompt: &str,
        model: ModelId,
        api_key: &str,
    ) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: model.as_str(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            repetition_penalty: REPETITION_PENALTY,
            stop: &STOP_SEQUENCES,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: provider_error_message(&body),
            });
        }

        let chat: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &chat.usage {
            debug!(
                "LLM call succeeded: model={}, prompt_tokens={}, completion_tokens={}",
                model, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat)
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(
        &self,
        prompt: &str,
        model: ModelId,
        api_key: &str,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, model, api_key).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Pulls `error.message` out of a provider error body, falling back to the raw body.
fn provider_error_message(body: &str) -> String {
    serde_json::from_str::<ProviderError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use axum::{
        http::{header, HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};

    use super::*;

    /// Serves `app` on an ephemeral local port and returns its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// Replies with the model and bearer header it received, so callers can check both.
    async fn echo_completion(headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
        let auth = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let content = format!(
            "  **Day 1: Echo**\nmodel={} auth={} max_tokens={}  ",
            body["model"].as_str().unwrap_or_default(),
            auth,
            body["max_tokens"]
        );
        Json(json!({
            "choices": [{"message": {"role": "assistant", "content": content}}],
            "usage": {"prompt_tokens": 3, "completion_tokens": 9}
        }))
    }

    async fn completions_server() -> String {
        let app = Router::new()
            .route("/ok/chat/completions", post(echo_completion))
            .route(
                "/bad/chat/completions",
                post(|| async {
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(json!({"error": {"message": "Invalid API key provided"}})),
                    )
                }),
            )
            .route(
                "/empty/chat/completions",
                post(|| async { Json(json!({"choices": []})) }),
            )
            .route(
                "/garbled/chat/completions",
                post(|| async { "<html>busy</html>" }),
            );
        serve(app).await
    }

    #[tokio::test]
    async fn test_generate_returns_trimmed_content() {
        let base = completions_server().await;
        let client = LlmClient::new(format!("{base}/ok")).unwrap();

        let text = client
            .generate("prompt", ModelId::Llama3_70b, "sk-local")
            .await
            .unwrap();
        assert_eq!(
            text,
            "**Day 1: Echo**\nmodel=meta-llama/Llama-3-70b-chat-hf auth=Bearer sk-local max_tokens=3000"
        );
    }

    #[tokio::test]
    async fn test_error_status_carries_provider_message() {
        let base = completions_server().await;
        let client = LlmClient::new(format!("{base}/bad")).unwrap();

        let err = client
            .generate("prompt", ModelId::default(), "wrong")
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid API key provided");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_choices_is_empty_content() {
        let base = completions_server().await;
        let client = LlmClient::new(format!("{base}/empty")).unwrap();
        let result = client.generate("prompt", ModelId::default(), "k").await;
        assert!(matches!(result, Err(LlmError::EmptyContent)));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_parse_error() {
        let base = completions_server().await;
        let client = LlmClient::new(format!("{base}/garbled")).unwrap();
        let result = client.generate("prompt", ModelId::default(), "k").await;
        assert!(matches!(result, Err(LlmError::Parse(_))));
    }

    #[test]
    fn test_provider_error_message_extracts_message() {
        let body = r#"{"error": {"message": "Invalid API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(provider_error_message(body), "Invalid API key provided");
    }

    #[test]
    fn test_provider_error_message_falls_back_to_body() {
        assert_eq!(provider_error_message("  upstream timeout \n"), "upstream timeout");
    }

    #[test]
    fn test_chat_response_text_takes_first_choice_trimmed() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "\n  **Day 1: Hi**\nbody  \n"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30}
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text(), Some("**Day 1: Hi**\nbody"));
    }

    #[test]
    fn test_chat_response_without_choices_has_no_text() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.text().is_none());

        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": "   "}}]}"#).unwrap();
        assert!(blank.text().is_none());
    }

    #[test]
    fn test_request_body_carries_sampling_parameters() {
        let body = ChatRequest {
            model: ModelId::Llama3_70b.as_str(),
            messages: vec![ChatMessage {
                role: "user",
                content: "hello",
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            top_p: TOP_P,
            repetition_penalty: REPETITION_PENALTY,
            stop: &STOP_SEQUENCES,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "meta-llama/Llama-3-70b-chat-hf");
        assert_eq!(value["max_tokens"], 3000);
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["stop"][1], "<|endoftext|>");
    }

    #[test]
    fn test_completions_url_strips_trailing_slash() {
        let client = LlmClient::new("https://api.together.xyz/v1/").unwrap();
        assert_eq!(
            client.completions_url(),
            "https://api.together.xyz/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_returns_error() {
        let client = LlmClient::new("http://127.0.0.1:1/v1").unwrap();
        let result = client.generate("prompt", ModelId::default(), "key").await;
        assert!(matches!(result, Err(LlmError::Http(_))));
    }
}
