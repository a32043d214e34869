//! OpenAI Chat Completions adapter
//!
//! Sends the prompt as a single user message and returns
//! `choices[0].message.content`.

use super::http::send_json;
use async_trait::async_trait;
use dual_ai_application::{GenerationError, TextGenerator};
use dual_ai_domain::{Model, ProviderId};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
    refusal: Option<String>,
}

/// Text of the first choice.
///
/// A refusal is reported as a failure so the caller sees `null` rather
/// than mistaking it for an answer.
fn extract_text(response: ChatCompletionResponse) -> Result<String, GenerationError> {
    let message = response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .ok_or(GenerationError::EmptyResponse)?;

    match (message.content, message.refusal) {
        (Some(text), _) => Ok(text),
        (None, Some(refusal)) => Err(GenerationError::Other(format!("refused: {}", refusal))),
        (None, None) => Err(GenerationError::EmptyResponse),
    }
}

pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: Model,
}

impl OpenAiGenerator {
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
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    fn provider(&self) -> ProviderId {
        ProviderId::ChatGpt
    }

    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = ChatCompletionRequest {
            model: self.model.as_str(),
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model = %self.model, "POST {}", self.endpoint());

        let request = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body);

        let response: ChatCompletionResponse = send_json(request).await?;
        extract_text(response)
    }
}
