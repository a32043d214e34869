//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Secrets are never required in the file; each section names the
//! environment variables it reads them from.

mod audit;
mod providers;
mod server;

pub use audit::{AuditTarget, FileAuditConfig};
pub use providers::{FileGeminiConfig, FileOpenAiConfig, FileProvidersConfig};
pub use server::{DEFAULT_BIND, FileServerConfig};

use dual_ai_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Provider credentials, endpoints and models
    pub providers: FileProvidersConfig,
    /// Audit store settings
    pub audit: FileAuditConfig,
}

impl FileConfig {
    /// Validate against the process environment.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        self.validate_with(&|name: &str| std::env::var(name).ok())
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks, in order:
    /// 1. Server bind address parses
    /// 2. Timeouts are non-zero
    /// 3. Model names are present and match their provider
    /// 4. Provider credentials resolve
    /// 5. An audit store is reachable in config
    pub fn validate_with(&self, lookup: &dyn Fn(&str) -> Option<String>) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Bind address
        if self.server.bind.parse::<SocketAddr>().is_err() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidBindAddress {
                    value: self.server.bind.clone(),
                },
                format!("server.bind: '{}' is not a socket address", self.server.bind),
            ));
        }

        // 2. Timeouts
        for (field, value) in [
            ("providers.request_timeout_secs", self.providers.request_timeout_secs),
            ("providers.connect_timeout_secs", self.providers.connect_timeout_secs),
            ("audit.timeout_secs", self.audit.timeout_secs),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroDuration {
                        field: field.to_string(),
                    },
                    format!("{}: must be greater than zero", field),
                ));
            }
        }

        // 3. Models
        issues.extend(self.providers.parse_openai_model().1);
        issues.extend(self.providers.parse_gemini_model().1);

        // 4. Credentials
        issues.extend(self.providers.credential_issues_with(lookup));

        // 5. Audit store
        issues.extend(self.audit.resolve_target_with(lookup).1);

        issues
    }
}
