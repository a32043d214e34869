//! Provider outcomes and their normalized form.

use crate::core::provider::ProviderId;
use serde::{Deserialize, Serialize};

/// Settled result of one provider call.
///
/// Produced exactly once per provider per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ProviderOutcome {
    /// The provider returned a textual completion
    Success(String),
    /// The provider call failed; the reason stays server-side
    Failure(String),
}

impl ProviderOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        ProviderOutcome::Success(text.into())
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        ProviderOutcome::Failure(reason.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderOutcome::Success(_))
    }

    /// Failure reason, if this outcome is a failure
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            ProviderOutcome::Failure(reason) => Some(reason),
            ProviderOutcome::Success(_) => None,
        }
    }
}

impl<E: std::fmt::Display> From<Result<String, E>> for ProviderOutcome {
    fn from(result: Result<String, E>) -> Self {
        match result {
            Ok(text) => ProviderOutcome::Success(text),
            Err(e) => ProviderOutcome::Failure(e.to_string()),
        }
    }
}

/// Caller-visible reply for one provider.
///
/// `None` marks a failed provider. A provider that legitimately produced
/// empty text is `Some("")`, so the two cases never collide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedReply(Option<String>);

impl NormalizedReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self(Some(text.into()))
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_inner(self) -> Option<String> {
        self.0
    }
}

/// One outcome per provider, keyed by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub chatgpt: ProviderOutcome,
    pub gemini: ProviderOutcome,
}

impl DispatchOutcome {
    pub fn get(&self, provider: ProviderId) -> &ProviderOutcome {
        match provider {
            ProviderId::ChatGpt => &self.chatgpt,
            ProviderId::Gemini => &self.gemini,
        }
    }

    /// Iterate `(provider, outcome)` pairs in [`ProviderId::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (ProviderId, &ProviderOutcome)> {
        ProviderId::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    pub fn success_count(&self) -> usize {
        self.iter().filter(|(_, o)| o.is_success()).count()
    }
}

/// Normalized replies for both providers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualReply {
    pub chatgpt: NormalizedReply,
    pub gemini: NormalizedReply,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_from_result() {
        let ok: ProviderOutcome = Ok::<_, String>("hi".to_string()).into();
        assert_eq!(ok, ProviderOutcome::success("hi"));

        let err: ProviderOutcome = Err::<String, _>("boom").into();
        assert_eq!(err.failure_reason(), Some("boom"));
        assert!(!err.is_success());
    }

    #[test]
    fn absent_and_empty_serialize_differently() {
        let absent = serde_json::to_value(NormalizedReply::absent()).unwrap();
        let empty = serde_json::to_value(NormalizedReply::text("")).unwrap();
        assert_eq!(absent, serde_json::Value::Null);
        assert_eq!(empty, serde_json::json!(""));
        assert_ne!(absent, empty);
    }

    #[test]
    fn dispatch_outcome_keyed_by_provider() {
        let outcome = DispatchOutcome {
            chatgpt: ProviderOutcome::success("a"),
            gemini: ProviderOutcome::failure("down"),
        };
        assert_eq!(outcome.get(ProviderId::ChatGpt), &ProviderOutcome::success("a"));
        assert_eq!(outcome.success_count(), 1);

        let providers: Vec<_> = outcome.iter().map(|(p, _)| p).collect();
        assert_eq!(providers, ProviderId::ALL.to_vec());
    }
}
