//! Run Dual Prompt use case
//!
//! One request, one pass: check configuration, dispatch to both providers,
//! normalize, schedule the audit write and return without waiting for it.

use super::dispatch::Dispatcher;
use super::normalize::normalize_all;
use crate::background::BackgroundTasks;
use crate::ports::audit_log::AuditLog;
use crate::ports::text_generator::TextGenerator;
use dual_ai_domain::{AuditRecord, DualReply, Prompt, ProviderId};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;
use tracing::{debug, error, info, warn};

/// Errors that end a request before a reply is produced
#[derive(Error, Debug)]
pub enum RunDualPromptError {
    #[error("Provider credentials missing for: {}", format_providers(.0))]
    Misconfigured(Vec<ProviderId>),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_providers(providers: &[ProviderId]) -> String {
    providers
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Input for the RunDualPrompt use case
#[derive(Debug, Clone)]
pub struct RunDualPromptInput {
    /// The validated prompt
    pub prompt: Prompt,
    /// Network address of the caller, stored with the audit record
    pub source_ip: Option<String>,
}

impl RunDualPromptInput {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            source_ip: None,
        }
    }

    pub fn with_source_ip(mut self, source_ip: Option<String>) -> Self {
        self.source_ip = source_ip;
        self
    }
}

/// Provider slots as resolved from configuration at startup.
///
/// A `None` slot means the credential for that provider was absent.
#[derive(Clone, Default)]
pub struct ProviderSet {
    pub chatgpt: Option<Arc<dyn TextGenerator>>,
    pub gemini: Option<Arc<dyn TextGenerator>>,
}

impl ProviderSet {
    pub fn new(
        chatgpt: Option<Arc<dyn TextGenerator>>,
        gemini: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        Self { chatgpt, gemini }
    }

    /// Providers with no configured generator
    pub fn missing(&self) -> Vec<ProviderId> {
        let mut missing = Vec::new();
        if self.chatgpt.is_none() {
            missing.push(ProviderId::ChatGpt);
        }
        if self.gemini.is_none() {
            missing.push(ProviderId::Gemini);
        }
        missing
    }
}

/// Use case for answering one prompt with both providers
pub struct RunDualPromptUseCase {
    dispatcher: Option<Dispatcher>,
    missing: Vec<ProviderId>,
    audit: Arc<dyn AuditLog>,
    tasks: BackgroundTasks,
}

impl RunDualPromptUseCase {
    pub fn new(providers: ProviderSet, audit: Arc<dyn AuditLog>, tasks: BackgroundTasks) -> Self {
        let missing = providers.missing();
        let dispatcher = match (providers.chatgpt, providers.gemini) {
            (Some(chatgpt), Some(gemini)) => Some(Dispatcher::new(chatgpt, gemini)),
            _ => None,
        };

        Self {
            dispatcher,
            missing,
            audit,
            tasks,
        }
    }

    /// Bound each provider call
    pub fn with_provider_timeout(mut self, timeout: Duration) -> Self {
        self.dispatcher = self.dispatcher.map(|d| d.with_timeout(timeout));
        self
    }

    pub fn is_configured(&self) -> bool {
        self.dispatcher.is_some()
    }

    pub fn missing_providers(&self) -> &[ProviderId] {
        &self.missing
    }

    pub fn audit_sink(&self) -> &'static str {
        self.audit.name()
    }

    pub fn background(&self) -> &BackgroundTasks {
        &self.tasks
    }

    /// Execute the use case
    ///
    /// Provider failures never surface here; they become absent replies.
    /// Only missing configuration and a lost outcome are errors.
    ///
    /// Dispatch, normalization and the audit write run as one tracked task.
    /// Dropping the returned future (client gone) leaves that task running,
    /// so issued provider calls settle and the audit row is still written.
    pub async fn execute(&self, input: RunDualPromptInput) -> Result<DualReply, RunDualPromptError> {
        let Some(dispatcher) = &self.dispatcher else {
            warn!(
                "Rejecting prompt: credentials missing for {}",
                format_providers(&self.missing)
            );
            return Err(RunDualPromptError::Misconfigured(self.missing.clone()));
        };

        let (reply_tx, reply_rx) = oneshot::channel();
        let dispatcher = dispatcher.clone();
        let audit = Arc::clone(&self.audit);
        let tasks = self.tasks.clone();

        self.tasks.spawn(async move {
            let result = Self::run(&dispatcher, audit, &tasks, input).await;
            if reply_tx.send(result).is_err() {
                debug!("Caller went away before the reply was ready");
            }
        });

        reply_rx.await.map_err(|_| {
            error!("Request task ended without a reply");
            RunDualPromptError::Internal("request task ended without a reply".to_string())
        })?
    }

    async fn run(
        dispatcher: &Dispatcher,
        audit: Arc<dyn AuditLog>,
        tasks: &BackgroundTasks,
        input: RunDualPromptInput,
    ) -> Result<DualReply, RunDualPromptError> {
        info!("Dispatching prompt ({} bytes) to both providers", input.prompt.content().len());

        let outcome = dispatcher.dispatch(&input.prompt).await.map_err(|e| {
            error!("Dispatch did not settle: {}", e);
            RunDualPromptError::Internal(e.to_string())
        })?;

        let reply = normalize_all(&outcome);
        info!(
            "Prompt settled: {}/{} providers succeeded",
            outcome.success_count(),
            ProviderId::ALL.len()
        );

        Self::schedule_audit(
            audit,
            tasks,
            AuditRecord::new(&input.prompt, &reply, input.source_ip),
        );

        Ok(reply)
    }

    /// Fire-and-forget: spawn the audit write and return immediately
    fn schedule_audit(audit: Arc<dyn AuditLog>, tasks: &BackgroundTasks, record: AuditRecord) {
        tasks.spawn(async move {
            match audit.record(&record).await {
                Ok(()) => debug!("Audit record written to {}", audit.name()),
                Err(e) => error!("Audit logging error ({}): {}", audit.name(), e),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::audit_log::NoAuditLog;
    use crate::use_cases::test_support::{
        FailingAuditLog, MockGenerator, PanickingAuditLog, RecordingAuditLog,
    };
    use std::sync::atomic::Ordering;
    use std::time::Instant;

    fn input(text: &str) -> RunDualPromptInput {
        RunDualPromptInput::new(Prompt::new(text).unwrap())
    }

    fn both(
        chatgpt: Arc<MockGenerator>,
        gemini: Arc<MockGenerator>,
    ) -> ProviderSet {
        ProviderSet::new(Some(chatgpt), Some(gemini))
    }

    #[tokio::test]
    async fn returns_both_replies_unmodified() {
        let use_case = RunDualPromptUseCase::new(
            both(
                MockGenerator::ok(ProviderId::ChatGpt, "**gpt** answer"),
                MockGenerator::ok(ProviderId::Gemini, "gemini\nanswer"),
            ),
            Arc::new(NoAuditLog),
            BackgroundTasks::new(),
        );

        let reply = use_case.execute(input("hi")).await.unwrap();

        assert_eq!(reply.chatgpt.as_deref(), Some("**gpt** answer"));
        assert_eq!(reply.gemini.as_deref(), Some("gemini\nanswer"));
    }

    #[tokio::test]
    async fn single_provider_outage_still_succeeds() {
        let use_case = RunDualPromptUseCase::new(
            both(
                MockGenerator::ok(ProviderId::ChatGpt, "ok"),
                MockGenerator::failing(ProviderId::Gemini, "503"),
            ),
            Arc::new(NoAuditLog),
            BackgroundTasks::new(),
        );

        let reply = use_case.execute(input("hi")).await.unwrap();

        assert_eq!(reply.chatgpt.as_deref(), Some("ok"));
        assert!(!reply.gemini.is_present());
    }

    #[tokio::test]
    async fn missing_credentials_make_no_calls() {
        let gemini = MockGenerator::ok(ProviderId::Gemini, "unused");
        let use_case = RunDualPromptUseCase::new(
            ProviderSet::new(None, Some(gemini.clone())),
            Arc::new(NoAuditLog),
            BackgroundTasks::new(),
        );

        assert!(!use_case.is_configured());
        let err = use_case.execute(input("hi")).await.unwrap_err();

        assert!(matches!(err, RunDualPromptError::Misconfigured(ref m) if m == &[ProviderId::ChatGpt]));
        assert_eq!(gemini.calls(), 0);
        assert_eq!(err.to_string(), "Provider credentials missing for: chatgpt");
    }

    #[tokio::test]
    async fn audit_record_written_in_background() {
        let audit = Arc::new(RecordingAuditLog::default());
        let tasks = BackgroundTasks::new();
        let use_case = RunDualPromptUseCase::new(
            both(
                MockGenerator::failing(ProviderId::ChatGpt, "down"),
                MockGenerator::ok(ProviderId::Gemini, "g"),
            ),
            audit.clone(),
            tasks.clone(),
        );

        use_case
            .execute(input("log me").with_source_ip(Some("203.0.113.7".to_string())))
            .await
            .unwrap();
        assert!(tasks.drain(Duration::from_secs(5)).await);

        let records = audit.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_prompt, "log me");
        assert_eq!(records[0].chatgpt_reply, None);
        assert_eq!(records[0].gemini_reply.as_deref(), Some("g"));
        assert_eq!(records[0].source_ip.as_deref(), Some("203.0.113.7"));
    }

    #[tokio::test]
    async fn slow_failing_audit_does_not_delay_or_change_reply() {
        let audit = Arc::new(FailingAuditLog::new(Duration::from_millis(500)));
        let tasks = BackgroundTasks::new();
        let use_case = RunDualPromptUseCase::new(
            both(
                MockGenerator::ok(ProviderId::ChatGpt, "a"),
                MockGenerator::ok(ProviderId::Gemini, "b"),
            ),
            audit.clone(),
            tasks.clone(),
        );

        let started = Instant::now();
        let reply = use_case.execute(input("hi")).await.unwrap();

        assert!(started.elapsed() < Duration::from_millis(400));
        assert_eq!(reply.chatgpt.as_deref(), Some("a"));
        assert_eq!(reply.gemini.as_deref(), Some("b"));

        assert!(tasks.drain(Duration::from_secs(5)).await);
        assert_eq!(audit.attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn panicking_audit_is_contained() {
        let tasks = BackgroundTasks::new();
        let use_case = RunDualPromptUseCase::new(
            both(
                MockGenerator::ok(ProviderId::ChatGpt, "a"),
                MockGenerator::ok(ProviderId::Gemini, "b"),
            ),
            Arc::new(PanickingAuditLog),
            tasks.clone(),
        );

        let reply = use_case.execute(input("hi")).await.unwrap();
        assert!(tasks.drain(Duration::from_secs(5)).await);

        assert_eq!(reply.chatgpt.as_deref(), Some("a"));
        // the use case keeps working after a sink panic
        let again = use_case.execute(input("again")).await.unwrap();
        assert_eq!(again.gemini.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn provider_timeout_is_applied() {
        let use_case = RunDualPromptUseCase::new(
            both(
                MockGenerator::ok(ProviderId::ChatGpt, "a"),
                MockGenerator::ok(ProviderId::Gemini, "slow").with_delay(Duration::from_secs(30)),
            ),
            Arc::new(NoAuditLog),
            BackgroundTasks::new(),
        )
        .with_provider_timeout(Duration::from_millis(50));

        let reply = use_case.execute(input("hi")).await.unwrap();
        assert_eq!(reply.chatgpt.as_deref(), Some("a"));
        assert!(!reply.gemini.is_present());
    }

    #[tokio::test]
    async fn dropped_caller_still_settles_and_audits() {
        let chatgpt = MockGenerator::ok(ProviderId::ChatGpt, "a").with_delay(Duration::from_millis(100));
        let gemini = MockGenerator::ok(ProviderId::Gemini, "b").with_delay(Duration::from_millis(100));
        let audit = Arc::new(RecordingAuditLog::default());
        let tasks = BackgroundTasks::new();
        let use_case = RunDualPromptUseCase::new(
            both(chatgpt.clone(), gemini.clone()),
            audit.clone(),
            tasks.clone(),
        );

        let abandoned =
            tokio::time::timeout(Duration::from_millis(20), use_case.execute(input("gone"))).await;
        assert!(abandoned.is_err());

        assert!(tasks.drain(Duration::from_secs(5)).await);
        assert_eq!(chatgpt.calls(), 1);
        assert_eq!(gemini.calls(), 1);

        let records = audit.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].user_prompt, "gone");
        assert_eq!(records[0].chatgpt_reply.as_deref(), Some("a"));
        assert_eq!(records[0].gemini_reply.as_deref(), Some("b"));
    }
}
