//! Provider configuration from TOML (`[providers]` section)

use dual_ai_domain::{ConfigIssue, ConfigIssueCode, Model, ProviderId};
use serde::{Deserialize, Serialize};

/// Resolve a secret: direct value first, then the named environment variable.
///
/// Blank values count as absent.
pub(crate) fn resolve_secret(
    direct: Option<&String>,
    env_name: &str,
    lookup: &dyn Fn(&str) -> Option<String>,
) -> Option<String> {
    direct
        .cloned()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| lookup(env_name).filter(|v| !v.trim().is_empty()))
}

/// OpenAI API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the OpenAI API (can be overridden for compatible gateways).
    pub base_url: String,
    /// Chat model to request.
    pub model: String,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: Model::default_for(ProviderId::ChatGpt).to_string(),
        }
    }
}

impl FileOpenAiConfig {
    pub fn resolve_api_key_with(&self, lookup: &dyn Fn(&str) -> Option<String>) -> Option<String> {
        resolve_secret(self.api_key.as_ref(), &self.api_key_env, lookup)
    }
}

/// Google Gemini API provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GOOGLE_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Gemini model to request.
    pub model: String,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "GOOGLE_API_KEY".to_string(),
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: Model::default_for(ProviderId::Gemini).to_string(),
        }
    }
}

impl FileGeminiConfig {
    pub fn resolve_api_key_with(&self, lookup: &dyn Fn(&str) -> Option<String>) -> Option<String> {
        resolve_secret(self.api_key.as_ref(), &self.api_key_env, lookup)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    /// Upper bound for one provider call, after which it settles as failed.
    pub request_timeout_secs: u64,
    /// TCP/TLS connect timeout for provider HTTP clients.
    pub connect_timeout_secs: u64,
    /// OpenAI API settings.
    pub openai: FileOpenAiConfig,
    /// Gemini API settings.
    pub gemini: FileGeminiConfig,
}

impl Default for FileProvidersConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 120,
            connect_timeout_secs: 10,
            openai: FileOpenAiConfig::default(),
            gemini: FileGeminiConfig::default(),
        }
    }
}

impl FileProvidersConfig {
    /// Parse a configured model name, collecting issues for blank or
    /// cross-family names.
    fn parse_model(
        field: &str,
        value: &str,
        provider: ProviderId,
    ) -> (Model, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        if value.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModelName {
                    field: field.to_string(),
                },
                format!("{}: model name cannot be empty", field),
            ));
            return (Model::default_for(provider), issues);
        }

        let model = Model::from(value.trim());
        if !model.fits(provider) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ModelProviderMismatch {
                    field: field.to_string(),
                    model: model.to_string(),
                },
                format!(
                    "{}: '{}' does not look like a {} model",
                    field,
                    model,
                    provider.display_name()
                ),
            ));
        }
        (model, issues)
    }

    pub fn parse_openai_model(&self) -> (Model, Vec<ConfigIssue>) {
        Self::parse_model("providers.openai.model", &self.openai.model, ProviderId::ChatGpt)
    }

    pub fn parse_gemini_model(&self) -> (Model, Vec<ConfigIssue>) {
        Self::parse_model("providers.gemini.model", &self.gemini.model, ProviderId::Gemini)
    }

    /// Report providers whose API key cannot be resolved.
    pub fn credential_issues_with(
        &self,
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let keys = [
            (
                ProviderId::ChatGpt,
                &self.openai.api_key_env,
                self.openai.resolve_api_key_with(lookup),
            ),
            (
                ProviderId::Gemini,
                &self.gemini.api_key_env,
                self.gemini.resolve_api_key_with(lookup),
            ),
        ];
        for (provider, env, key) in keys {
            if key.is_none() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::MissingCredential {
                        provider: provider.to_string(),
                        env: env.clone(),
                    },
                    format!(
                        "{} API key not set ({}); every prompt request will fail with 500",
                        provider.display_name(),
                        env
                    ),
                ));
            }
        }
        issues
    }
}
