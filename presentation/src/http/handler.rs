//! `POST /api/dual-ai` handler

use super::client_ip::extract_client_ip;
use super::dto::DualReplyBody;
use super::error::ApiError;
use super::router::AppState;
use axum::{
    Json,
    body::Bytes,
    extract::{
        FromRequest, Request, State,
        rejection::{BytesRejection, FailedToBufferBody},
    },
    http::Method,
};
use dual_ai_application::RunDualPromptInput;
use dual_ai_domain::Prompt;
use dual_ai_domain::util::log_preview;
use tracing::{debug, warn};

/// Accept one prompt and answer with both providers' replies.
///
/// Rejections are checked in order: method, prompt, configuration.
pub async fn dual_prompt(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<DualReplyBody>, ApiError> {
    if *request.method() != Method::POST {
        return Err(reject(ApiError::MethodNotAllowed));
    }

    let source_ip = extract_client_ip(&request);
    let body = Bytes::from_request(request, &state)
        .await
        .map_err(|e| reject(body_error(e)))?;
    let prompt = parse_prompt(&body).map_err(reject)?;

    debug!(
        source_ip = source_ip.as_deref().unwrap_or("-"),
        "Prompt received: {}",
        log_preview(prompt.content(), 80)
    );

    let input = RunDualPromptInput::new(prompt).with_source_ip(source_ip);
    let reply = state
        .use_case
        .execute(input)
        .await
        .map_err(|e| reject(ApiError::from(e)))?;

    Ok(Json(DualReplyBody::from(reply)))
}

fn reject(err: ApiError) -> ApiError {
    warn!(reason = err.reason(), "Request rejected ({})", err.status());
    err
}

/// Only the configured length limit is a 413; a body that could not be
/// read at all is treated like any other unusable prompt.
fn body_error(rejection: BytesRejection) -> ApiError {
    match rejection {
        BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
            ApiError::PayloadTooLarge
        }
        other => {
            debug!("Request body unreadable: {}", other);
            ApiError::BadRequest
        }
    }
}

/// Body must be a JSON object whose `prompt` is a non-empty string.
fn parse_prompt(body: &[u8]) -> Result<Prompt, ApiError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|_| ApiError::BadRequest)?;
    let text = value
        .get("prompt")
        .and_then(|p| p.as_str())
        .ok_or(ApiError::BadRequest)?;
    Prompt::new(text).map_err(|_| ApiError::BadRequest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_prompt_accepts_string_prompt() {
        let prompt = parse_prompt(br#"{"prompt":"  Explain ownership  ","extra":1}"#).unwrap();
        assert_eq!(prompt.content(), "  Explain ownership  ");
    }

    #[test]
    fn parse_prompt_keeps_whitespace_only_prompt() {
        let prompt = parse_prompt(br#"{"prompt":" \t\n"}"#).unwrap();
        assert_eq!(prompt.content(), " \t\n");
    }

    #[test]
    fn parse_prompt_rejects_bad_shapes() {
        let bodies: [&[u8]; 7] = [
            br#"{"prompt":""}"#,
            br#"{"prompt":42}"#,
            br#"{"prompt":null}"#,
            br#"{}"#,
            br#"["prompt"]"#,
            br#"not json"#,
            b"",
        ];
        for body in bodies {
            assert_eq!(parse_prompt(body).unwrap_err(), ApiError::BadRequest);
        }
    }
}
