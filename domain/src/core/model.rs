//! Model value object representing a chat-completion model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Token budget for reasoning-family models. These models spend part of
/// the completion budget on hidden reasoning tokens, so the visible
/// answer needs a much larger total allocation.
const REASONING_MAX_COMPLETION_TOKENS: u32 = 10_000;

/// Token budget for ordinary models.
const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 2_000;

/// Identifier of the chat-completion model to call (Value Object).
///
/// Stored as the raw identifier string so any model the endpoint accepts
/// can be configured; family detection is name-pattern based.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model(String);

impl Model {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this model family consumes completion tokens on hidden
    /// reasoning (e.g. `gpt-5-nano`, `o1`).
    pub fn is_reasoning(&self) -> bool {
        self.0.contains("nano") || self.0.contains("o1") || self.0.contains("reasoning")
    }

    /// Completion token budget to request for this model.
    ///
    /// Reasoning models get headroom for reasoning tokens plus the
    /// visible answer; everything else gets the ordinary budget.
    pub fn max_completion_tokens(&self) -> u32 {
        if self.is_reasoning() {
            REASONING_MAX_COMPLETION_TOKENS
        } else {
            DEFAULT_MAX_COMPLETION_TOKENS
        }
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4)
    fn default() -> Self {
        Model::new("gpt-4")
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model::new(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "gpt-4");
        assert!(!Model::default().is_reasoning());
    }

    #[test]
    fn test_reasoning_family_detection() {
        assert!(Model::new("gpt-5-nano").is_reasoning());
        assert!(Model::new("o1-preview").is_reasoning());
        assert!(Model::new("my-reasoning-model").is_reasoning());
        assert!(!Model::new("gpt-4").is_reasoning());
        assert!(!Model::new("gpt-3.5-turbo").is_reasoning());
    }

    #[test]
    fn test_token_budget_by_family() {
        assert_eq!(Model::new("gpt-5-nano").max_completion_tokens(), 10_000);
        assert_eq!(Model::new("gpt-4").max_completion_tokens(), 2_000);
    }

    #[test]
    fn test_model_roundtrip() {
        let model: Model = "gpt-4o-mini".parse().unwrap();
        assert_eq!(model.to_string(), "gpt-4o-mini");

        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, "\"gpt-4o-mini\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
