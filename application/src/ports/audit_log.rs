//! Port for the durable audit trail.
//!
//! Defines the [`AuditLog`] trait for appending one [`AuditRecord`] per
//! request to a write-only store.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics (including audit failures), while this port
//! captures the request/response transaction in durable storage.

use async_trait::async_trait;
use dual_ai_domain::AuditRecord;
use thiserror::Error;

/// Errors that can occur while writing an audit record
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Audit store unreachable: {0}")]
    Connection(String),

    #[error("Audit store rejected record ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Audit I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Audit serialization error: {0}")]
    Serialization(String),
}

/// Append-only sink for audit records.
///
/// Callers never await this on the response path; errors are reported to
/// the operational log and discarded.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Short sink name for log lines and health output
    fn name(&self) -> &'static str;

    /// Append one record
    async fn record(&self, record: &AuditRecord) -> Result<(), AuditError>;
}

/// No-op implementation used when no store is configured.
pub struct NoAuditLog;

#[async_trait]
impl AuditLog for NoAuditLog {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn record(&self, _record: &AuditRecord) -> Result<(), AuditError> {
        Ok(())
    }
}
