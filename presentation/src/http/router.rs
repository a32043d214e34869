use super::handler::dual_prompt;
use super::health::health;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{any, get},
};
use dual_ai_application::RunDualPromptUseCase;
use std::sync::Arc;

/// Shared state for every request
#[derive(Clone)]
pub struct AppState {
    pub use_case: Arc<RunDualPromptUseCase>,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(use_case: Arc<RunDualPromptUseCase>, max_body_bytes: usize) -> Self {
        Self {
            use_case,
            max_body_bytes,
        }
    }
}

/// Build the application router.
///
/// The prompt endpoint takes every method so non-POST requests get a 405
/// from the handler with an `Allow` header.
pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.max_body_bytes);
    Router::new()
        .route("/api/dual-ai", any(dual_prompt))
        .route("/dual-ai", any(dual_prompt))
        .route("/health", get(health))
        .layer(body_limit)
        .with_state(state)
}
