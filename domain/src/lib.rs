//! Domain layer for supplement-advisor
//!
//! This crate contains the core business logic of the recommendation
//! pipeline: the health profile entity, recommendation entities, the
//! deterministic prompt builder, the strict response parser, and the
//! rule-based mock generator. It has no dependencies on infrastructure
//! or presentation concerns and performs no I/O.

pub mod core;
pub mod profile;
pub mod prompt;
pub mod recommendation;

// Re-export commonly used types
pub use crate::core::{
    error::LlmError,
    model::Model,
    string::{ellipsize, truncate_str},
};
pub use profile::{
    entities::{Gender, HealthProfile, ProfileError},
    vocab,
};
pub use prompt::build_prompt;
pub use recommendation::{
    entities::{Recommendation, Supplement},
    parsing::parse_response,
    rules::mock_recommendation,
};
