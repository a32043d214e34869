//! Core domain concepts shared across all subdomains.
//!
//! - [`prompt::Prompt`]: a validated prompt to fan out to the providers
//! - [`provider::ProviderId`]: identity of an external generation service
//! - [`model::Model`]: provider-side model names (GPT, Gemini)
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod prompt;
pub mod provider;
