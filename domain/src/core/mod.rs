//! Core domain types: errors, model value object, string helpers.

pub mod error;
pub mod model;
pub mod string;
