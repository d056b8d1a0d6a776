//! Configuration loading: TOML files plus `ADVISOR_*` env vars.

pub mod file_config;
pub mod loader;

pub use file_config::{ConfigValidationError, DEFAULT_API_KEY_ENV, FileConfig};
pub use loader::ConfigLoader;
