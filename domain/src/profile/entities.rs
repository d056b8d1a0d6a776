//! Health profile entity and its invariants.
//!
//! A [`HealthProfile`] is built once from intake input and is immutable
//! afterwards; the whole recommendation pipeline reads it, nothing writes
//! to it.

use crate::profile::vocab;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when intake input violates profile invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("나이는 1 이상이어야 합니다 (입력값: {0})")]
    InvalidAge(u32),

    #[error("체중은 0보다 커야 합니다 (입력값: {0})")]
    InvalidWeight(f64),

    #[error("알 수 없는 성별: {0} (male/female/other)")]
    UnknownGender(String),

    #[error("알 수 없는 건강 고민: {0}")]
    UnknownConcern(String),

    #[error("알 수 없는 생활 습관: {0}")]
    UnknownLifestyle(String),
}

/// Gender selection from the intake form (Value Object).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Korean display label used in prompts and summaries.
    pub fn korean_label(&self) -> &'static str {
        match self {
            Gender::Male => "남성",
            Gender::Female => "여성",
            Gender::Other => "기타",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            other => Err(ProfileError::UnknownGender(other.to_string())),
        }
    }
}

/// Structured user input driving recommendation generation.
///
/// `concerns` and `lifestyle` preserve selection order; the mock rules
/// and prompt builder depend on that ordering being stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub smoking: bool,
    /// Free text; empty string means "none".
    #[serde(default)]
    pub medications: String,
    #[serde(default)]
    pub concerns: Vec<String>,
    #[serde(default)]
    pub lifestyle: Vec<String>,
}

impl HealthProfile {
    pub fn new(age: u32, gender: Gender, weight_kg: f64, smoking: bool) -> Self {
        Self {
            age,
            gender,
            weight_kg,
            smoking,
            medications: String::new(),
            concerns: Vec::new(),
            lifestyle: Vec::new(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_medications(mut self, medications: impl Into<String>) -> Self {
        self.medications = medications.into();
        self
    }

    pub fn with_concerns(mut self, concerns: Vec<String>) -> Self {
        self.concerns = concerns;
        self
    }

    pub fn with_lifestyle(mut self, lifestyle: Vec<String>) -> Self {
        self.lifestyle = lifestyle;
        self
    }

    // ==================== Queries ====================

    /// Exact-element membership test on concerns.
    pub fn has_concern(&self, value: &str) -> bool {
        self.concerns.iter().any(|c| c == value)
    }

    /// Exact-element membership test on lifestyle selections.
    pub fn has_lifestyle(&self, value: &str) -> bool {
        self.lifestyle.iter().any(|l| l == value)
    }

    /// Whether the user reported any current medication.
    pub fn has_medications(&self) -> bool {
        !self.medications.trim().is_empty()
    }

    /// Enforce intake invariants: positive age and weight, and
    /// vocabulary membership for concerns/lifestyle.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.age == 0 {
            return Err(ProfileError::InvalidAge(self.age));
        }
        if !(self.weight_kg > 0.0) {
            return Err(ProfileError::InvalidWeight(self.weight_kg));
        }
        for concern in &self.concerns {
            if !vocab::is_known_concern(concern) {
                return Err(ProfileError::UnknownConcern(concern.clone()));
            }
        }
        for item in &self.lifestyle {
            if !vocab::is_known_lifestyle(item) {
                return Err(ProfileError::UnknownLifestyle(item.clone()));
            }
        }
        Ok(())
    }
}
