//! OpenAI chat-completions gateway implementation
//!
//! One HTTP POST per [`ChatRequest`]: a single user-role message, the
//! configured model, and the family-derived completion token budget.
//! The wall-clock timeout is enforced by the reqwest client; retry
//! policy belongs to the use case, not this adapter.

use advisor_application::ports::chat_completion::{
    ChatCompletion, ChatCompletionGateway, ChatRequest, FinishReason, GatewayError,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Default OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completion gateway backed by the OpenAI HTTP API.
pub struct OpenAiGateway {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiGateway {
    /// Create a gateway with the given credential and per-attempt
    /// timeout.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Other(e.to_string()))?;

        info!(timeout_secs = timeout.as_secs(), "OpenAiGateway initialized");

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the gateway at an OpenAI-compatible endpoint (testing,
    /// proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl ChatCompletionGateway for OpenAiGateway {
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, GatewayError> {
        let body = CompletionBody::from_request(request);
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %request.model, url, "sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Http {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        let payload: CompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Other(format!("invalid response body: {}", e)))?;

        Ok(into_completion(payload))
    }
}

/// Map a reqwest failure onto the transport error taxonomy.
fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() || error.is_request() {
        GatewayError::Network(error.to_string())
    } else {
        GatewayError::Other(error.to_string())
    }
}

/// Pull `error.message` out of an OpenAI error body, falling back to the
/// raw body text.
fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .map(|e| e.message)
        .unwrap_or_else(|| body.to_string())
}

/// Flatten the wire response into the port's [`ChatCompletion`].
///
/// A missing `choices` entry or a null `content` becomes an empty body;
/// the use case decides what to do with it based on the finish reason.
fn into_completion(payload: CompletionResponse) -> ChatCompletion {
    let choice = payload.choices.into_iter().next();
    match choice {
        Some(choice) => ChatCompletion {
            content: choice.message.content.unwrap_or_default(),
            finish_reason: choice.finish_reason.as_deref().map(FinishReason::from_api),
        },
        None => ChatCompletion {
            content: String::new(),
            finish_reason: None,
        },
    }
}

// ==================== Wire Types ====================

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    max_completion_tokens: u32,
}

impl<'a> CompletionBody<'a> {
    fn from_request(request: &'a ChatRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: vec![WireMessage {
                role: "user",
                content: &request.prompt,
            }],
            max_completion_tokens: request.max_completion_tokens,
        }
    }
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    #[serde(default)]
    message: WireResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize, Default)]
struct WireResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: Option<ErrorBody>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}
