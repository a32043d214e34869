//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    #[error("Missing outcome for provider {0}")]
    MissingOutcome(String),
}
