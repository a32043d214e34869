//! Text generator port
//!
//! Defines the uniform contract every external generation service is
//! wrapped behind.

use async_trait::async_trait;
use dual_ai_domain::{Model, ProviderId};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while asking a provider for a completion
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Authentication failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Upstream returned {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Response contained no text")]
    EmptyResponse,

    #[error("Other error: {0}")]
    Other(String),
}

impl GenerationError {
    /// Build the error for a non-2xx upstream status.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => GenerationError::Unauthorized { status, message },
            _ => GenerationError::UpstreamStatus { status, message },
        }
    }
}

/// A single external text-generation service.
///
/// Implementations (adapters) live in the infrastructure layer. They keep no
/// state between calls and report every failure through the returned
/// `Result`; the dispatcher additionally contains panics.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Which provider slot this generator fills
    fn provider(&self) -> ProviderId;

    /// Model the generator requests
    fn model(&self) -> &Model;

    /// Send the prompt and return the first textual completion
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
