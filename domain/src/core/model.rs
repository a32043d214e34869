//! Model value object representing a provider-side model name

use super::provider::ProviderId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Known generation models (Value Object)
///
/// Each provider adapter is configured with one of these. Unknown names
/// are carried through as [`Model::Custom`] so new upstream releases work
/// without a code change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // GPT models
    Gpt4o,
    Gpt4oMini,
    Gpt41,
    Gpt5,
    // Gemini models
    Gemini3Pro,
    Gemini25Pro,
    Gemini25Flash,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt5 => "gpt-5",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Custom(s) => s,
        }
    }

    /// Default model used for a provider when none is configured
    pub fn default_for(provider: ProviderId) -> Model {
        match provider {
            ProviderId::ChatGpt => Model::Gpt4o,
            ProviderId::Gemini => Model::Gemini3Pro,
        }
    }

    /// Check if this is a GPT model
    pub fn is_gpt(&self) -> bool {
        match self {
            Model::Gpt4o | Model::Gpt4oMini | Model::Gpt41 | Model::Gpt5 => true,
            Model::Custom(s) => s.starts_with("gpt-") || s.starts_with("o1") || s.starts_with("o3"),
            _ => false,
        }
    }

    /// Check if this is a Gemini model
    pub fn is_gemini(&self) -> bool {
        match self {
            Model::Gemini3Pro | Model::Gemini25Pro | Model::Gemini25Flash => true,
            Model::Custom(s) => s.starts_with("gemini-"),
            _ => false,
        }
    }

    /// Whether this model plausibly belongs to the given provider.
    ///
    /// Custom names that match neither family are accepted for any provider.
    pub fn fits(&self, provider: ProviderId) -> bool {
        match provider {
            ProviderId::ChatGpt => !self.is_gemini(),
            ProviderId::Gemini => !self.is_gpt(),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4.1" => Model::Gpt41,
            "gpt-5" => Model::Gpt5,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
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
        Ok(Model::from(s.as_str()))
    }
}
