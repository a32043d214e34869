use super::router::AppState;
use axum::{Json, extract::State};
use dual_ai_domain::ProviderId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProvidersStatus {
    pub chatgpt: bool,
    pub gemini: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub version: &'static str,
    pub providers: ProvidersStatus,
    pub audit: &'static str,
}

/// Liveness plus which providers have credentials and where audit rows go.
pub async fn health(State(state): State<AppState>) -> Json<HealthBody> {
    let missing = state.use_case.missing_providers();
    Json(HealthBody {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        providers: ProvidersStatus {
            chatgpt: !missing.contains(&ProviderId::ChatGpt),
            gemini: !missing.contains(&ProviderId::Gemini),
        },
        audit: state.use_case.audit_sink(),
    })
}
