//! Application layer for supplement-advisor
//!
//! This crate contains the recommendation use case, the chat-completion
//! port, and the injected client configuration. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ClientConfig;
pub use ports::chat_completion::{
    ChatCompletion, ChatCompletionGateway, ChatRequest, FinishReason, GatewayError,
};
pub use use_cases::get_recommendation::{GetRecommendationUseCase, classify_gateway_error};
