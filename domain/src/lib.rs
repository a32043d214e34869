//! Domain layer for dual-ai
//!
//! This crate contains the value objects shared by every layer. It has no
//! dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! A single [`Prompt`] is fanned out to every [`ProviderId`]. Each provider
//! settles into exactly one [`ProviderOutcome`]; outcomes are normalized into
//! a [`DualReply`] for the caller and an [`AuditRecord`] for the durable log.

pub mod audit;
pub mod config;
pub mod core;
pub mod reply;
pub mod util;

// Re-export commonly used types
pub use audit::record::AuditRecord;
pub use config::validation::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{
    error::DomainError, model::Model, prompt::Prompt, provider::ProviderId,
};
pub use reply::outcome::{DispatchOutcome, DualReply, NormalizedReply, ProviderOutcome};
