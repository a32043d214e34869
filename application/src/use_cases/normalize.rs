//! Result normalizer
//!
//! Success text passes through verbatim; failure becomes an absent reply.
//! The failure reason is dropped here; the dispatcher already logged it.

use dual_ai_domain::{DispatchOutcome, DualReply, NormalizedReply, ProviderOutcome};

pub fn normalize(outcome: &ProviderOutcome) -> NormalizedReply {
    match outcome {
        ProviderOutcome::Success(text) => NormalizedReply::text(text.clone()),
        ProviderOutcome::Failure(_) => NormalizedReply::absent(),
    }
}

pub fn normalize_all(outcome: &DispatchOutcome) -> DualReply {
    DualReply {
        chatgpt: normalize(&outcome.chatgpt),
        gemini: normalize(&outcome.gemini),
    }
}
