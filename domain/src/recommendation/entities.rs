//! Recommendation entities returned by the pipeline.

use serde::{Deserialize, Serialize};

/// A single recommended supplement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplement {
    /// Korean supplement name (e.g. "멜라토닌").
    pub name: String,
    /// Why this supplement fits the profile.
    pub reason: String,
    /// Daily-dose text, free-form unit (e.g. "1000-2000 IU").
    pub dosage: String,
    /// Optional caution text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caution: Option<String>,
}

impl Supplement {
    pub fn new(
        name: impl Into<String>,
        dosage: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            dosage: dosage.into(),
            reason: reason.into(),
            caution: None,
        }
    }

    pub fn with_caution(mut self, caution: impl Into<String>) -> Self {
        self.caution = Some(caution.into());
        self
    }
}

/// Structured recommendation handed back to the caller.
///
/// `supplements` is expected non-empty for every path the pipeline
/// produces, but consumers must tolerate an empty list from a live model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub summary: String,
    pub supplements: Vec<Supplement>,
}
