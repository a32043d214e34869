//! HTTP error responses

use super::dto::ErrorBody;
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use dual_ai_application::RunDualPromptError;

pub const PROMPT_REQUIRED: &str = "Prompt is required and must be a string.";
pub const KEYS_NOT_CONFIGURED: &str = "API keys for AI services are not configured on the server.";
pub const INTERNAL_ERROR: &str = "An internal server error occurred.";
pub const BODY_TOO_LARGE: &str = "Request body is too large.";

/// A request that ends without a dual reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    MethodNotAllowed,
    BadRequest,
    PayloadTooLarge,
    Misconfigured,
    Internal,
}

impl ApiError {
    /// Machine-checkable rejection reason
    pub fn reason(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "method_not_allowed",
            ApiError::BadRequest => "bad_request",
            ApiError::PayloadTooLarge => "payload_too_large",
            ApiError::Misconfigured => "misconfigured",
            ApiError::Internal => "internal",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Misconfigured | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ApiError::MethodNotAllowed => "Method Not Allowed",
            ApiError::BadRequest => PROMPT_REQUIRED,
            ApiError::PayloadTooLarge => BODY_TOO_LARGE,
            ApiError::Misconfigured => KEYS_NOT_CONFIGURED,
            ApiError::Internal => INTERNAL_ERROR,
        }
    }
}

impl From<RunDualPromptError> for ApiError {
    fn from(err: RunDualPromptError) -> Self {
        match err {
            RunDualPromptError::Misconfigured(_) => ApiError::Misconfigured,
            RunDualPromptError::Internal(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self == ApiError::MethodNotAllowed {
            return (
                self.status(),
                [(header::ALLOW, HeaderValue::from_static("POST"))],
                self.message(),
            )
                .into_response();
        }

        (
            self.status(),
            Json(ErrorBody {
                error: self.message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dual_ai_domain::ProviderId;

    #[test]
    fn use_case_errors_map_to_500_without_detail() {
        let misconfigured = ApiError::from(RunDualPromptError::Misconfigured(vec![ProviderId::Gemini]));
        assert_eq!(misconfigured.reason(), "misconfigured");
        assert_eq!(misconfigured.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let internal = ApiError::from(RunDualPromptError::Internal("join error: secret".into()));
        assert_eq!(internal.message(), INTERNAL_ERROR);
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "POST");
    }
}
