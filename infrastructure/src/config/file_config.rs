//! Raw TOML/env configuration data types
//!
//! These structs represent the exact structure of the config file. They
//! deserialize directly and use domain types where appropriate; the
//! conversion into the injected [`ClientConfig`] is the only place the
//! credential environment variable is read.

use advisor_application::ClientConfig;
use advisor_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Environment variable consulted when no direct `api_key` is set.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("model name cannot be empty")]
    EmptyModelName,
}

/// Raw configuration from TOML files and `ADVISOR_*` env vars.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Environment variable name holding the API key.
    pub api_key_env: String,
    /// Model identifier to request.
    pub model: Model,
    /// Route every request to the deterministic mock generator.
    pub use_mock: bool,
    /// Wall-clock timeout per completion attempt, in seconds.
    pub timeout_seconds: u64,
    /// Retries after the first attempt.
    pub max_retries: u32,
}

impl Default for FileConfig {
    fn default() -> Self {
        let defaults = ClientConfig::default();
        Self {
            api_key: None,
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            model: defaults.model,
            use_mock: defaults.use_mock,
            timeout_seconds: defaults.request_timeout.as_secs(),
            max_retries: defaults.max_retries,
        }
    }
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.model.as_str().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        Ok(())
    }

    /// Resolve the credential: direct value first, then the configured
    /// environment variable. Empty strings count as absent.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|key| !key.is_empty())
            })
    }

    /// Convert into the injected pipeline configuration.
    pub fn into_client_config(self) -> ClientConfig {
        let api_key = self.resolve_api_key();
        ClientConfig {
            api_key,
            model: self.model,
            use_mock: self.use_mock,
            request_timeout: Duration::from_secs(self.timeout_seconds),
            max_retries: self.max_retries,
            ..ClientConfig::default()
        }
    }
}
