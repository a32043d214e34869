//! Shared HTTP plumbing for provider adapters.

use dual_ai_application::GenerationError;
use dual_ai_domain::util::truncate_str;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upstream error bodies are cut to this many bytes in error messages
const MAX_ERROR_BODY: usize = 300;

/// Build the HTTP client shared by both adapters.
///
/// No overall request timeout is set here; the dispatcher bounds each call.
pub fn build_client(connect_timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .user_agent(concat!("dual-ai/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Send a JSON request and decode a JSON response.
///
/// Non-2xx statuses become [`GenerationError::from_status`] with the
/// upstream's own error message when one can be found.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, GenerationError> {
    let response = request.send().await.map_err(transport_error)?;
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if !status.is_success() {
        return Err(GenerationError::from_status(
            status.as_u16(),
            upstream_error_message(&body),
        ));
    }

    serde_json::from_str(&body).map_err(|e| GenerationError::MalformedResponse(e.to_string()))
}

fn transport_error(e: reqwest::Error) -> GenerationError {
    if e.is_timeout() {
        GenerationError::ConnectionError(format!("timed out: {}", e))
    } else {
        GenerationError::ConnectionError(e.to_string())
    }
}

/// Pull `error.message` out of an OpenAI/Gemini style error body, falling
/// back to the raw (truncated) body.
pub(crate) fn upstream_error_message(body: &str) -> String {
    let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = parsed
        .as_ref()
        .and_then(|v| v.pointer("/error/message"))
        .and_then(|m| m.as_str());

    match message {
        Some(m) => truncate_str(m, MAX_ERROR_BODY).to_string(),
        None if body.trim().is_empty() => "(empty body)".to_string(),
        None => truncate_str(body.trim(), MAX_ERROR_BODY).to_string(),
    }
}
