//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Default listen address
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// HTTP server settings
///
/// # Example
///
/// ```toml
/// [server]
/// bind = "0.0.0.0:8080"
/// shutdown_grace_secs = 10
/// max_body_bytes = 1048576
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Socket address to listen on
    pub bind: String,
    /// How long shutdown waits for in-flight audit writes
    pub shutdown_grace_secs: u64,
    /// Largest accepted request body
    pub max_body_bytes: usize,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            shutdown_grace_secs: 10,
            max_body_bytes: 1024 * 1024,
        }
    }
}
