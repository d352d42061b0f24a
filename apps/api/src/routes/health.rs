use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-tailor"
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    pub status: &'static str,
    pub has_anthropic_key: bool,
    pub has_gemini_key: bool,
}

/// GET /api/health
/// Reports which AI providers are configured.
pub async fn api_health_handler(State(state): State<AppState>) -> Json<ApiHealth> {
    Json(ApiHealth {
        status: "ok",
        has_anthropic_key: state.llm.has_api_key(),
        has_gemini_key: state.gemini.has_api_key(),
    })
}
