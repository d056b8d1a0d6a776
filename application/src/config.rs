//! Client configuration injected into the pipeline.
//!
//! [`ClientConfig`] is an explicit value handed to the use case at
//! construction. Nothing in the pipeline reads ambient process state;
//! the infrastructure config loader is the only place environment
//! variables are consulted.

use advisor_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the recommendation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API credential. `None` (or empty) routes every request to the
    /// mock generator.
    pub api_key: Option<String>,
    /// Model identifier to request.
    pub model: Model,
    /// Default mock-mode flag; callers can override per call.
    pub use_mock: bool,
    /// Wall-clock budget for one completion attempt.
    pub request_timeout: Duration,
    /// Retries after the first attempt (2 retries = 3 attempts total).
    pub max_retries: u32,
    /// Backoff base for empty-body retries; attempt N waits N times this.
    pub empty_retry_base_delay: Duration,
    /// Backoff base for timeout retries; attempt N waits N times this.
    pub timeout_retry_base_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: Model::default(),
            use_mock: false,
            request_timeout: Duration::from_secs(60),
            max_retries: 2,
            empty_retry_base_delay: Duration::from_secs(1),
            timeout_retry_base_delay: Duration::from_secs(2),
        }
    }
}

impl ClientConfig {
    /// Whether a usable credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    // ==================== Builder Methods ====================

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_use_mock(mut self, use_mock: bool) -> Self {
        self.use_mock = use_mock;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}
