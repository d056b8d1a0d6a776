//! Presentation layer for supplement-advisor
//!
//! This crate contains the CLI argument definitions, console output
//! formatting, and the progress spinner.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::{Cli, OutputFormat};
pub use output::ConsoleFormatter;
pub use progress::PendingSpinner;
