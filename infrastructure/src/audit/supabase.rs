//! Supabase audit sink
//!
//! Inserts one row per request through the PostgREST endpoint
//! `POST {url}/rest/v1/{table}` using the service role key.

use async_trait::async_trait;
use dual_ai_application::{AuditError, AuditLog};
use dual_ai_domain::AuditRecord;
use dual_ai_domain::util::truncate_str;
use std::time::Duration;
use tracing::debug;

const MAX_ERROR_BODY: usize = 300;

pub struct SupabaseAuditLog {
    client: reqwest::Client,
    endpoint: String,
    service_key: String,
    timeout: Duration,
}

impl SupabaseAuditLog {
    pub fn new(
        client: reqwest::Client,
        url: &str,
        service_key: impl Into<String>,
        table: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            endpoint: format!("{}/rest/v1/{}", url.trim_end_matches('/'), table),
            service_key: service_key.into(),
            timeout,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// PostgREST errors carry `message`; anything else is passed through.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| truncate_str(body.trim(), MAX_ERROR_BODY).to_string())
}

#[async_trait]
impl AuditLog for SupabaseAuditLog {
    fn name(&self) -> &'static str {
        "supabase"
    }

    async fn record(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=minimal")
            .timeout(self.timeout)
            .json(record)
            .send()
            .await
            .map_err(|e| AuditError::Connection(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!("Supabase insert accepted ({})", status.as_u16());
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(AuditError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }
}
