//! Typed errors for the recommendation pipeline

use thiserror::Error;

/// Terminal pipeline errors surfaced to the caller.
///
/// Each variant carries the human-readable message to display. Transient
/// failures are retried inside the use case; whatever reaches the caller
/// here is final and must not be retried again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// The remote call exceeded its time budget or signaled HTTP 408.
    #[error("{0}")]
    Timeout(String),

    /// Non-timeout HTTP failure, quota exhaustion, or retry/token-budget
    /// exhaustion.
    #[error("{0}")]
    Api(String),

    /// Connectivity failure.
    #[error("{0}")]
    Network(String),

    /// Malformed or incomplete model output, or an unclassified failure.
    #[error("{0}")]
    Parse(String),

    /// The caller tore down the request mid-flight. Never displayed;
    /// callers filter this with [`LlmError::is_cancelled`].
    #[error("요청이 취소되었습니다.")]
    Cancelled,
}

impl LlmError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LlmError::Cancelled)
    }

    /// Short machine-readable kind tag, used for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            LlmError::Timeout(_) => "timeout",
            LlmError::Api(_) => "api",
            LlmError::Network(_) => "network",
            LlmError::Parse(_) => "parse",
            LlmError::Cancelled => "cancelled",
        }
    }
}
