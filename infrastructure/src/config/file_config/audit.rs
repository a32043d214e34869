//! Audit store configuration from TOML (`[audit]` section)

use super::providers::resolve_secret;
use dual_ai_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where audit records go, after resolving secrets and precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditTarget {
    Supabase {
        url: String,
        service_key: String,
        table: String,
    },
    Jsonl(PathBuf),
    Disabled,
}

/// Audit store settings
///
/// # Example
///
/// ```toml
/// [audit]
/// supabase_url_env = ["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"]
/// supabase_key_env = "SUPABASE_SERVICE_ROLE_KEY"
/// table = "ai_lab_logs"
/// jsonl_path = "/var/log/dual-ai/audit.jsonl"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuditConfig {
    /// Environment variables checked in order for the project URL.
    pub supabase_url_env: Vec<String>,
    /// Direct project URL.
    pub supabase_url: Option<String>,
    /// Environment variable holding the service role key.
    pub supabase_key_env: String,
    /// Direct service role key (prefer the env var).
    pub supabase_key: Option<String>,
    /// Table receiving one row per request.
    pub table: String,
    /// Append-only JSONL file, used when Supabase is not configured.
    pub jsonl_path: Option<PathBuf>,
    /// Request timeout for the Supabase insert.
    pub timeout_secs: u64,
}

impl Default for FileAuditConfig {
    fn default() -> Self {
        Self {
            supabase_url_env: vec![
                "SUPABASE_URL".to_string(),
                "NEXT_PUBLIC_SUPABASE_URL".to_string(),
            ],
            supabase_url: None,
            supabase_key_env: "SUPABASE_SERVICE_ROLE_KEY".to_string(),
            supabase_key: None,
            table: "ai_lab_logs".to_string(),
            jsonl_path: None,
            timeout_secs: 10,
        }
    }
}

impl FileAuditConfig {
    fn resolve_url(&self, lookup: &dyn Fn(&str) -> Option<String>) -> Option<String> {
        if let Some(url) = self.supabase_url.as_ref().filter(|u| !u.trim().is_empty()) {
            return Some(url.clone());
        }
        self.supabase_url_env
            .iter()
            .find_map(|name| lookup(name).filter(|v| !v.trim().is_empty()))
    }

    /// Pick the audit target: Supabase, then JSONL, then disabled.
    pub fn resolve_target_with(
        &self,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> (AuditTarget, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let url = self.resolve_url(lookup);
        let key = resolve_secret(self.supabase_key.as_ref(), &self.supabase_key_env, lookup);

        match (url, key) {
            (Some(url), Some(service_key)) => {
                return (
                    AuditTarget::Supabase {
                        url,
                        service_key,
                        table: self.table.clone(),
                    },
                    issues,
                );
            }
            (Some(_), None) => issues.push(ConfigIssue::warning(
                ConfigIssueCode::PartialAuditStore {
                    missing: self.supabase_key_env.clone(),
                },
                format!(
                    "Supabase URL is set but {} is not; Supabase audit disabled",
                    self.supabase_key_env
                ),
            )),
            (None, Some(_)) => issues.push(ConfigIssue::warning(
                ConfigIssueCode::PartialAuditStore {
                    missing: self.supabase_url_env.join(" / "),
                },
                "Supabase service key is set but no project URL; Supabase audit disabled",
            )),
            (None, None) => {}
        }

        if let Some(path) = &self.jsonl_path {
            return (AuditTarget::Jsonl(path.clone()), issues);
        }

        issues.push(ConfigIssue::warning(
            ConfigIssueCode::AuditStoreMissing,
            "No audit store configured; prompts will not be recorded",
        ));
        (AuditTarget::Disabled, issues)
    }
}
