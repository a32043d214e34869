//! Structured configuration issues.
//!
//! Loaders collect these instead of failing fast so that every problem is
//! reported at startup in one pass.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the process cannot start with this configuration.
    Error,
    /// Non-fatal: the service starts but some requests will be degraded.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name field is present but blank.
    EmptyModelName { field: String },
    /// A model from one provider family is configured for the other.
    ModelProviderMismatch { field: String, model: String },
    /// The API key for a provider could not be resolved.
    MissingCredential { provider: String, env: String },
    /// No audit store is configured; audit writes become no-ops.
    AuditStoreMissing,
    /// Only one of the Supabase URL / key pair is present.
    PartialAuditStore { missing: String },
    /// The server bind address does not parse.
    InvalidBindAddress { value: String },
    /// A duration field is zero.
    ZeroDuration { field: String },
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
