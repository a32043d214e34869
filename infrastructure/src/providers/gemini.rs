//! Google Gemini `generateContent` adapter

use super::http::send_json;
use async_trait::async_trait;
use dual_ai_application::{GenerationError, TextGenerator};
use dual_ai_domain::{Model, ProviderId};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [TextPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Concatenate the text parts of the first candidate, skipping thought
/// summaries.
fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return match response.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => Err(GenerationError::Other(format!("prompt blocked: {}", reason))),
            None => Err(GenerationError::EmptyResponse),
        };
    };

    let Some(content) = candidate.content else {
        return match candidate.finish_reason {
            Some(reason) => Err(GenerationError::Other(format!(
                "no content (finish reason: {})",
                reason
            ))),
            None => Err(GenerationError::EmptyResponse),
        };
    };

    let texts: Vec<String> = content
        .parts
        .into_iter()
        .filter(|p| !p.thought)
        .filter_map(|p| p.text)
        .collect();

    if texts.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(texts.concat())
}

pub struct GeminiGenerator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: Model,
}

impl GeminiGenerator {
    pub fn new(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: Model,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into(),
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn provider(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateContentRequest {
            contents: [Content {
                role: "user",
                parts: [TextPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, "POST {}", self.endpoint());

        let request = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body);

        let response: GenerateContentResponse = send_json(request).await?;
        extract_text(response)
    }
}
