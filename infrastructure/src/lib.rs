//! Infrastructure layer for supplement-advisor
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the OpenAI chat-completions gateway and the
//! configuration file/env loader.

pub mod config;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use openai::OpenAiGateway;
