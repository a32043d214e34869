//! Prompt value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A prompt to be answered by both providers (Value Object)
///
/// Represents the single user text that is fanned out to every provider
/// for one request. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prompt {
    content: String,
}

impl Prompt {
    /// Create a new prompt, rejecting only the empty string.
    ///
    /// The content is kept verbatim; whitespace-only text is a valid prompt.
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::EmptyPrompt);
        }
        Ok(Self { content })
    }

    /// Try to create a new prompt, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        Self::new(content).ok()
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }

}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Prompt {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Prompt::new(s)
    }
}

impl TryFrom<&str> for Prompt {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Prompt::new(s)
    }
}

impl From<Prompt> for String {
    fn from(prompt: Prompt) -> Self {
        prompt.content
    }
}
