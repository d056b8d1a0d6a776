//! Recommendation entities, response parsing, and the mock rule engine.

pub mod entities;
pub mod parsing;
pub mod rules;
