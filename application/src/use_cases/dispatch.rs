//! Dispatcher
//!
//! Fans one prompt out to every provider concurrently and waits for all of
//! them to settle.

use crate::ports::text_generator::{GenerationError, TextGenerator};
use dual_ai_domain::util::log_preview;
use dual_ai_domain::{DispatchOutcome, DomainError, Prompt, ProviderId, ProviderOutcome};
use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

/// Issues both provider calls concurrently with settle-all semantics.
///
/// A failing, hanging (when a timeout is set) or panicking provider only
/// affects its own outcome slot.
#[derive(Clone)]
pub struct Dispatcher {
    chatgpt: Arc<dyn TextGenerator>,
    gemini: Arc<dyn TextGenerator>,
    timeout: Option<Duration>,
}

impl Dispatcher {
    pub fn new(chatgpt: Arc<dyn TextGenerator>, gemini: Arc<dyn TextGenerator>) -> Self {
        Self {
            chatgpt,
            gemini,
            timeout: None,
        }
    }

    /// Bound every provider call; an expired call settles as a failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Query all providers in parallel and collect one outcome each.
    ///
    /// Both tasks are spawned before either is awaited. The only error is an
    /// outcome that never arrived, which means the runtime cancelled a task.
    pub async fn dispatch(&self, prompt: &Prompt) -> Result<DispatchOutcome, DomainError> {
        debug!("Dispatching prompt: {}", log_preview(prompt.content(), 80));

        let mut join_set = JoinSet::new();

        for (provider, generator) in [
            (ProviderId::ChatGpt, &self.chatgpt),
            (ProviderId::Gemini, &self.gemini),
        ] {
            let generator = Arc::clone(generator);
            let prompt = prompt.content().to_string();
            let timeout = self.timeout;

            join_set.spawn(async move {
                let outcome = Self::call_provider(provider, generator, &prompt, timeout).await;
                (provider, outcome)
            });
        }

        let mut chatgpt = None;
        let mut gemini = None;

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((ProviderId::ChatGpt, outcome)) => chatgpt = Some(outcome),
                Ok((ProviderId::Gemini, outcome)) => gemini = Some(outcome),
                Err(e) => {
                    warn!("Task join error: {}", e);
                }
            }
        }

        match (chatgpt, gemini) {
            (Some(chatgpt), Some(gemini)) => Ok(DispatchOutcome { chatgpt, gemini }),
            (None, _) => Err(DomainError::MissingOutcome(ProviderId::ChatGpt.to_string())),
            (_, None) => Err(DomainError::MissingOutcome(ProviderId::Gemini.to_string())),
        }
    }

    /// Call a single provider, folding every failure mode into an outcome
    async fn call_provider(
        provider: ProviderId,
        generator: Arc<dyn TextGenerator>,
        prompt: &str,
        timeout: Option<Duration>,
    ) -> ProviderOutcome {
        let started = Instant::now();
        let call = AssertUnwindSafe(generator.generate(prompt)).catch_unwind();

        let settled = match timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(settled) => settled,
                Err(_) => Ok(Err(GenerationError::Timeout(limit))),
            },
            None => call.await,
        };

        match settled {
            Ok(Ok(text)) => {
                info!(
                    "{} ({}) responded in {:?}",
                    provider.display_name(),
                    generator.model(),
                    started.elapsed()
                );
                ProviderOutcome::Success(text)
            }
            Ok(Err(e)) => {
                warn!("{} API error: {}", provider.display_name(), e);
                ProviderOutcome::Failure(e.to_string())
            }
            Err(_) => {
                error!("{} provider panicked", provider.display_name());
                ProviderOutcome::failure("provider panicked")
            }
        }
    }
}
