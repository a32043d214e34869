//! Audit sinks implementing [`AuditLog`](dual_ai_application::AuditLog)
//!
//! Provides [`SupabaseAuditLog`] (PostgREST insert) and [`JsonlAuditLog`]
//! (local append-only file).

mod jsonl;
mod supabase;

pub use jsonl::JsonlAuditLog;
pub use supabase::SupabaseAuditLog;

use crate::config::AuditTarget;
use dual_ai_application::{AuditLog, NoAuditLog};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Build the audit sink for a resolved target.
///
/// A JSONL file that cannot be opened degrades to [`NoAuditLog`] with a
/// warning; the service keeps answering prompts either way.
pub fn build_audit_log(
    target: &AuditTarget,
    client: reqwest::Client,
    timeout: Duration,
) -> Arc<dyn AuditLog> {
    match target {
        AuditTarget::Supabase {
            url,
            service_key,
            table,
        } => {
            let log = SupabaseAuditLog::new(client, url, service_key.clone(), table, timeout);
            info!("Audit records go to Supabase ({})", log.endpoint());
            Arc::new(log)
        }
        AuditTarget::Jsonl(path) => match JsonlAuditLog::open(path) {
            Ok(log) => {
                info!("Audit records go to {}", path.display());
                Arc::new(log)
            }
            Err(e) => {
                warn!(
                    "Could not open audit log {}: {}; audit disabled",
                    path.display(),
                    e
                );
                Arc::new(NoAuditLog)
            }
        },
        AuditTarget::Disabled => Arc::new(NoAuditLog),
    }
}
