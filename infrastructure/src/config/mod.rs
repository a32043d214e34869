//! Configuration loading for dual-ai
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `DUAL_AI_*` environment overrides
//! 2. `--config <path>` specified file
//! 3. Project root: `./dual-ai.toml` or `./.dual-ai.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/dual-ai/config.toml`
//! 5. Default values
//!
//! Provider keys and the Supabase URL/key are read from their own
//! environment variables (see [`FileProvidersConfig`], [`FileAuditConfig`]).

mod file_config;
mod loader;

pub use file_config::{
    AuditTarget, DEFAULT_BIND, FileAuditConfig, FileConfig, FileGeminiConfig, FileOpenAiConfig,
    FileProvidersConfig, FileServerConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
