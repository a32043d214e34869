//! Provider adapters implementing [`TextGenerator`](dual_ai_application::TextGenerator)
//!
//! - [`OpenAiGenerator`]: Chat Completions API
//! - [`GeminiGenerator`]: Generative Language `generateContent` API

mod gemini;
mod http;
mod openai;

pub use gemini::GeminiGenerator;
pub use http::build_client;
pub use openai::OpenAiGenerator;

use crate::config::FileProvidersConfig;
use dual_ai_application::{ProviderSet, TextGenerator};
use std::sync::Arc;
use tracing::info;

/// Build provider slots, leaving a slot empty when its key cannot be resolved.
pub fn build_providers(
    config: &FileProvidersConfig,
    client: reqwest::Client,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> ProviderSet {
    let chatgpt = config.openai.resolve_api_key_with(lookup).map(|key| {
        let (model, _) = config.parse_openai_model();
        info!("ChatGPT provider ready (model: {})", model);
        Arc::new(OpenAiGenerator::new(
            client.clone(),
            key,
            config.openai.base_url.clone(),
            model,
        )) as Arc<dyn TextGenerator>
    });

    let gemini = config.gemini.resolve_api_key_with(lookup).map(|key| {
        let (model, _) = config.parse_gemini_model();
        info!("Gemini provider ready (model: {})", model);
        Arc::new(GeminiGenerator::new(
            client.clone(),
            key,
            config.gemini.base_url.clone(),
            model,
        )) as Arc<dyn TextGenerator>
    });

    ProviderSet::new(chatgpt, gemini)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dual_ai_domain::{Model, ProviderId};

    #[test]
    fn both_keys_fill_both_slots() {
        let mut config = FileProvidersConfig::default();
        config.gemini.model = "gemini-2.5-pro".to_string();

        let set = build_providers(&config, reqwest::Client::new(), &|name: &str| {
            match name {
                "OPENAI_API_KEY" | "GOOGLE_API_KEY" => Some("k".to_string()),
                _ => None,
            }
        });

        assert!(set.missing().is_empty());
        let chatgpt = set.chatgpt.unwrap();
        assert_eq!(chatgpt.provider(), ProviderId::ChatGpt);
        assert_eq!(chatgpt.model(), &Model::Gpt4o);
        assert_eq!(set.gemini.unwrap().model(), &Model::Gemini25Pro);
    }

    #[test]
    fn missing_key_leaves_slot_empty() {
        let config = FileProvidersConfig::default();
        let set = build_providers(&config, reqwest::Client::new(), &|name: &str| {
            (name == "GOOGLE_API_KEY").then(|| "k".to_string())
        });
        assert_eq!(set.missing(), vec![ProviderId::ChatGpt]);
        assert!(set.gemini.is_some());
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = FileProvidersConfig::default();
        let set = build_providers(&config, reqwest::Client::new(), &|_: &str| {
            Some("   ".to_string())
        });
        assert_eq!(set.missing(), vec![ProviderId::ChatGpt, ProviderId::Gemini]);
    }
}
