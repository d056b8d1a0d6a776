//! Get Recommendation use case.
//!
//! The whole pipeline behind `getRecommendation`: resolve mock vs. live
//! path, build the prompt, call the gateway with bounded retries and
//! cancellable backoff, parse the raw output, and classify failures into
//! the typed [`LlmError`] exactly once.

use crate::config::ClientConfig;
use crate::ports::chat_completion::{
    ChatCompletion, ChatCompletionGateway, ChatRequest, GatewayError,
};
use advisor_domain::{
    HealthProfile, LlmError, Recommendation, build_prompt, ellipsize, mock_recommendation,
    parse_response, truncate_str,
};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const TIMEOUT_MESSAGE: &str = "API 호출 시간이 초과되었습니다. 다시 시도해주세요.";
const QUOTA_MESSAGE: &str = "API 사용량 한도를 초과했습니다. OpenAI 계정의 결제 정보와 사용량을 확인해주세요.\n\n개발 중에는 Mock 모드를 사용하세요: ADVISOR_USE_MOCK=true";
const NETWORK_MESSAGE: &str = "네트워크 연결을 확인해주세요.";
const UNKNOWN_MESSAGE: &str = "알 수 없는 오류가 발생했습니다.";
const LENGTH_EXHAUSTED_MESSAGE: &str = "API 응답이 토큰 한도에 도달하여 비어있습니다. reasoning 모델이 모든 토큰을 reasoning에 사용했을 수 있습니다. max_completion_tokens를 늘리거나 일반 모델을 사용하세요.";
const RETRIES_EXHAUSTED_MESSAGE: &str = "API 응답이 비어있습니다. 재시도 횟수를 초과했습니다.";

/// Use case for producing a supplement recommendation from a profile.
///
/// Owns no shared mutable state: each `execute` call runs its own retry
/// counter and timers, so concurrent invocations are independent.
pub struct GetRecommendationUseCase {
    gateway: Arc<dyn ChatCompletionGateway>,
    config: ClientConfig,
    cancellation_token: Option<CancellationToken>,
}

impl GetRecommendationUseCase {
    pub fn new(gateway: Arc<dyn ChatCompletionGateway>, config: ClientConfig) -> Self {
        Self {
            gateway,
            config,
            cancellation_token: None,
        }
    }

    /// Attach a cancellation token. Cancelling it aborts the in-flight
    /// call and any backoff wait; the call then resolves to
    /// [`LlmError::Cancelled`], which callers suppress.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the pipeline.
    ///
    /// `use_mock_override` takes precedence over the configured mock
    /// flag. The mock path never fails; the live path fails with a
    /// classified [`LlmError`].
    pub async fn execute(
        &self,
        profile: &HealthProfile,
        use_mock_override: Option<bool>,
    ) -> Result<Recommendation, LlmError> {
        let use_mock = use_mock_override.unwrap_or(self.config.use_mock);

        if use_mock || !self.config.has_credential() {
            debug!(
                use_mock,
                has_credential = self.config.has_credential(),
                "using mock recommendation path"
            );
            return Ok(mock_recommendation(profile));
        }

        let prompt = build_prompt(profile);
        let request = ChatRequest::for_model(self.config.model.clone(), prompt);
        info!(
            model = %request.model,
            max_completion_tokens = request.max_completion_tokens,
            "requesting recommendation"
        );

        let content = self.call_with_retry(&request).await?;
        debug!(preview = truncate_str(&content, 100), "raw model output");

        parse_response(&content)
    }

    /// Call the gateway with the documented retry policy:
    ///
    /// - up to `max_retries` retries (so `max_retries + 1` attempts);
    /// - empty body with finish reason != "length": retryable, backoff
    ///   `attempt * empty_retry_base_delay`;
    /// - transport timeout, HTTP 408, or an HTTP error whose message
    ///   indicates a timeout: retryable, backoff
    ///   `attempt * timeout_retry_base_delay`;
    /// - empty body with finish reason "length": immediate `api` error,
    ///   a retry would just exhaust the budget again;
    /// - any other failure: classified once and surfaced.
    async fn call_with_retry(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let max_retries = self.config.max_retries;
        let mut attempt: u32 = 1;

        loop {
            self.check_cancelled()?;

            match self.complete_cancellable(request).await? {
                Ok(completion) => {
                    if !completion.is_empty() {
                        return Ok(completion.content);
                    }
                    if completion.truncated_by_length() {
                        return Err(LlmError::Api(LENGTH_EXHAUSTED_MESSAGE.to_string()));
                    }
                    if attempt > max_retries {
                        return Err(LlmError::Api(RETRIES_EXHAUSTED_MESSAGE.to_string()));
                    }
                    warn!(attempt, max_retries, "empty response, retrying");
                    self.backoff(self.config.empty_retry_base_delay * attempt)
                        .await?;
                }
                Err(error) => {
                    if error.is_transient() && attempt <= max_retries {
                        warn!(attempt, max_retries, %error, "transient failure, retrying");
                        self.backoff(self.config.timeout_retry_base_delay * attempt)
                            .await?;
                    } else {
                        return Err(classify_gateway_error(error));
                    }
                }
            }

            attempt += 1;
        }
    }

    /// One gateway attempt, raced against cancellation.
    async fn complete_cancellable(
        &self,
        request: &ChatRequest,
    ) -> Result<Result<ChatCompletion, GatewayError>, LlmError> {
        match &self.cancellation_token {
            Some(token) => tokio::select! {
                _ = token.cancelled() => Err(LlmError::Cancelled),
                result = self.gateway.complete(request) => Ok(result),
            },
            None => Ok(self.gateway.complete(request).await),
        }
    }

    /// Non-blocking backoff wait, raced against cancellation.
    async fn backoff(&self, delay: std::time::Duration) -> Result<(), LlmError> {
        match &self.cancellation_token {
            Some(token) => tokio::select! {
                _ = token.cancelled() => Err(LlmError::Cancelled),
                _ = tokio::time::sleep(delay) => Ok(()),
            },
            None => {
                tokio::time::sleep(delay).await;
                Ok(())
            }
        }
    }

    fn check_cancelled(&self) -> Result<(), LlmError> {
        if let Some(token) = &self.cancellation_token
            && token.is_cancelled()
        {
            return Err(LlmError::Cancelled);
        }
        Ok(())
    }
}

/// Map a terminal gateway failure onto the user-facing error taxonomy.
/// Applied exactly once per `execute`, after the retry budget is spent.
pub fn classify_gateway_error(error: GatewayError) -> LlmError {
    match error {
        GatewayError::Timeout => LlmError::Timeout(TIMEOUT_MESSAGE.to_string()),
        GatewayError::Http { status: 408, .. } => LlmError::Timeout(TIMEOUT_MESSAGE.to_string()),
        // A timeout-indicating message wins over the status code, so a
        // 504 "Gateway timeout" is a timeout, not a generic API error
        GatewayError::Http { message, .. } if message.contains("timeout") => {
            LlmError::Timeout(TIMEOUT_MESSAGE.to_string())
        }
        GatewayError::Http { status: 429, .. } => LlmError::Api(QUOTA_MESSAGE.to_string()),
        GatewayError::Http { status, message } => LlmError::Api(format!(
            "API 오류 ({}): {}",
            status,
            ellipsize(&message, 200)
        )),
        GatewayError::Network(_) => LlmError::Network(NETWORK_MESSAGE.to_string()),
        GatewayError::Other(message) => {
            if message.contains("timeout") {
                LlmError::Timeout(TIMEOUT_MESSAGE.to_string())
            } else if message.contains("network") || message.contains("fetch") {
                LlmError::Network(NETWORK_MESSAGE.to_string())
            } else if message.is_empty() {
                LlmError::Parse(UNKNOWN_MESSAGE.to_string())
            } else {
                LlmError::Parse(message)
            }
        }
    }
}
