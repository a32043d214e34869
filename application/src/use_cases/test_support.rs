//! Mock ports shared by the use case tests.

use crate::ports::audit_log::{AuditError, AuditLog};
use crate::ports::text_generator::{GenerationError, TextGenerator};
use async_trait::async_trait;
use dual_ai_domain::{AuditRecord, Model, ProviderId};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

enum Behavior {
    Reply(String),
    Fail(String),
    Panic,
}

pub struct MockGenerator {
    provider: ProviderId,
    model: Model,
    behavior: Behavior,
    delay_ms: AtomicU64,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockGenerator {
    fn build(provider: ProviderId, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            provider,
            model: Model::default_for(provider),
            behavior,
            delay_ms: AtomicU64::new(0),
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub fn ok(provider: ProviderId, text: &str) -> Arc<Self> {
        Self::build(provider, Behavior::Reply(text.to_string()))
    }

    pub fn failing(provider: ProviderId, reason: &str) -> Arc<Self> {
        Self::build(provider, Behavior::Fail(reason.to_string()))
    }

    pub fn panicking(provider: ProviderId) -> Arc<Self> {
        Self::build(provider, Behavior::Panic)
    }

    pub fn with_delay(self: Arc<Self>, delay: Duration) -> Arc<Self> {
        self.delay_ms
            .store(delay.as_millis() as u64, Ordering::SeqCst);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn provider(&self) -> ProviderId {
        self.provider
    }

    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }

        match &self.behavior {
            Behavior::Reply(text) => Ok(text.clone()),
            Behavior::Fail(reason) => Err(GenerationError::ConnectionError(reason.clone())),
            Behavior::Panic => panic!("mock provider exploded"),
        }
    }
}

/// Audit log that keeps every record in memory.
#[derive(Default)]
pub struct RecordingAuditLog {
    records: Mutex<Vec<AuditRecord>>,
}

impl RecordingAuditLog {
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuditLog for RecordingAuditLog {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn record(&self, record: &AuditRecord) -> Result<(), AuditError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Audit log that always errors, optionally after a delay.
pub struct FailingAuditLog {
    pub delay: Duration,
    pub attempts: AtomicUsize,
}

impl FailingAuditLog {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            attempts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl AuditLog for FailingAuditLog {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn record(&self, _record: &AuditRecord) -> Result<(), AuditError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Err(AuditError::Connection("store offline".to_string()))
    }
}

/// Audit log that panics inside the background task.
pub struct PanickingAuditLog;

#[async_trait]
impl AuditLog for PanickingAuditLog {
    fn name(&self) -> &'static str {
        "panicking"
    }

    async fn record(&self, _record: &AuditRecord) -> Result<(), AuditError> {
        panic!("audit sink exploded")
    }
}
