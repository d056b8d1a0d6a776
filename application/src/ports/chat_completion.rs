//! Chat completion port
//!
//! Defines the interface for a single attempt against a remote
//! chat-completion endpoint. Implementations (adapters) live in the
//! infrastructure layer; the retry/backoff policy lives in the use case,
//! so an adapter performs exactly one attempt per call.

use advisor_domain::Model;
use async_trait::async_trait;
use thiserror::Error;

/// Transport-level errors from a single completion attempt.
///
/// These are raw failures; classification into user-facing
/// [`LlmError`](advisor_domain::LlmError) kinds happens once in the use
/// case, never per retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The attempt exceeded its wall-clock budget.
    #[error("request timed out")]
    Timeout,

    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never reached the endpoint.
    #[error("network error: {0}")]
    Network(String),

    /// Anything else (malformed response body, serialization, ...).
    #[error("{0}")]
    Other(String),
}

impl GatewayError {
    /// Transient failures are retried by the use case: timeouts,
    /// HTTP 408, and any HTTP error whose message indicates a timeout
    /// (e.g. 504 "Gateway timeout"). Everything else is classified and
    /// surfaced immediately.
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::Timeout => true,
            GatewayError::Http { status, message } => {
                *status == 408 || message.contains("timeout")
            }
            _ => false,
        }
    }
}

/// One chat-completion request: a single user-role message.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: Model,
    pub prompt: String,
    /// Output token budget; reasoning models need headroom for hidden
    /// reasoning tokens (see [`Model::max_completion_tokens`]).
    pub max_completion_tokens: u32,
}

impl ChatRequest {
    /// Build a request for `model`, deriving the token budget from the
    /// model family.
    pub fn for_model(model: Model, prompt: impl Into<String>) -> Self {
        let max_completion_tokens = model.max_completion_tokens();
        Self {
            model,
            prompt: prompt.into(),
            max_completion_tokens,
        }
    }
}

/// Why the model stopped generating, as reported by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    /// Token budget exhausted before the answer finished.
    Length,
    Other(String),
}

impl FinishReason {
    pub fn from_api(value: &str) -> Self {
        match value {
            "stop" => FinishReason::Stop,
            "length" => FinishReason::Length,
            other => FinishReason::Other(other.to_string()),
        }
    }
}

/// Result of a successful (HTTP-level) completion attempt.
///
/// `content` may legitimately be empty; the use case decides whether an
/// empty body is retryable based on `finish_reason`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletion {
    pub content: String,
    pub finish_reason: Option<FinishReason>,
}

impl ChatCompletion {
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// True when the body is empty because the token budget ran out;
    /// retrying cannot help, the budget itself must change.
    pub fn truncated_by_length(&self) -> bool {
        matches!(self.finish_reason, Some(FinishReason::Length))
    }
}

/// Gateway for chat-completion calls.
///
/// This port defines how the application layer reaches the remote model.
#[async_trait]
pub trait ChatCompletionGateway: Send + Sync {
    /// Perform a single completion attempt, enforcing the configured
    /// wall-clock timeout internally.
    async fn complete(&self, request: &ChatRequest) -> Result<ChatCompletion, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GatewayError::Timeout.is_transient());
        assert!(
            GatewayError::Http {
                status: 408,
                message: "request timeout".to_string()
            }
            .is_transient()
        );
        assert!(
            GatewayError::Http {
                status: 504,
                message: "Gateway timeout".to_string()
            }
            .is_transient()
        );
        assert!(
            !GatewayError::Http {
                status: 429,
                message: "quota".to_string()
            }
            .is_transient()
        );
        assert!(!GatewayError::Network("offline".to_string()).is_transient());
    }

    #[test]
    fn test_finish_reason_from_api() {
        assert_eq!(FinishReason::from_api("stop"), FinishReason::Stop);
        assert_eq!(FinishReason::from_api("length"), FinishReason::Length);
        assert_eq!(
            FinishReason::from_api("content_filter"),
            FinishReason::Other("content_filter".to_string())
        );
    }

    #[test]
    fn test_request_budget_follows_model_family() {
        let request = ChatRequest::for_model(Model::new("gpt-5-nano"), "p");
        assert_eq!(request.max_completion_tokens, 10_000);
        let request = ChatRequest::for_model(Model::new("gpt-4"), "p");
        assert_eq!(request.max_completion_tokens, 2_000);
    }

    #[test]
    fn test_truncated_by_length() {
        let completion = ChatCompletion {
            content: String::new(),
            finish_reason: Some(FinishReason::Length),
        };
        assert!(completion.is_empty());
        assert!(completion.truncated_by_length());

        let completion = ChatCompletion {
            content: String::new(),
            finish_reason: None,
        };
        assert!(!completion.truncated_by_length());
    }
}
