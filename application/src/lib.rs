//! Application layer for dual-ai
//!
//! This crate contains use cases, port definitions and the background task
//! tracker. It depends only on the domain layer.

pub mod background;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use background::BackgroundTasks;
pub use ports::{
    audit_log::{AuditError, AuditLog, NoAuditLog},
    text_generator::{GenerationError, TextGenerator},
};
pub use use_cases::dispatch::Dispatcher;
pub use use_cases::normalize::{normalize, normalize_all};
pub use use_cases::run_dual_prompt::{
    ProviderSet, RunDualPromptError, RunDualPromptInput, RunDualPromptUseCase,
};
