//! Progress spinner shown while a recommendation request is pending

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner displayed while the model call is in flight.
pub struct PendingSpinner {
    bar: ProgressBar,
}

impl PendingSpinner {
    /// Start a spinner with the given status message.
    pub fn start(message: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Start a hidden spinner (for --quiet).
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Update the status message.
    pub fn set_message(&self, message: &str) {
        self.bar.set_message(message.to_string());
    }

    /// Stop the spinner and erase it from the terminal.
    pub fn finish(self) {
        self.bar.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}
