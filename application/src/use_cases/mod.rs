//! Use cases: application-level orchestration of the domain logic.

pub mod get_recommendation;
