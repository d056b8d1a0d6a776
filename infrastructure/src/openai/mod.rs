//! OpenAI chat-completions adapter.

pub mod gateway;

pub use gateway::{DEFAULT_BASE_URL, OpenAiGateway};
