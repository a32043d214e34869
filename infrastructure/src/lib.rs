//! Infrastructure layer for dual-ai
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the OpenAI and Gemini clients, the audit
//! sinks, and configuration file loading.

pub mod audit;
pub mod config;
pub mod providers;

// Re-export commonly used types
pub use audit::{JsonlAuditLog, SupabaseAuditLog, build_audit_log};
pub use config::{
    AuditTarget, ConfigLoader, FileAuditConfig, FileConfig, FileGeminiConfig, FileOpenAiConfig,
    FileProvidersConfig, FileServerConfig,
};
pub use providers::{GeminiGenerator, OpenAiGenerator, build_client, build_providers};
