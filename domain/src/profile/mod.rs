//! Health profile: intake entities and fixed vocabularies.

pub mod entities;
pub mod vocab;
