//! Ports: interfaces implemented by infrastructure adapters.

pub mod chat_completion;
