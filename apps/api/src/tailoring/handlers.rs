use axum::{extract::State, response::Response, Json};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::formatting::docx_attachment;
use crate::resume::normalize;
use crate::state::AppState;
use crate::tailoring::tailor_resume;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorRequest {
    /// Falls back to the stored master resume when omitted.
    #[serde(default)]
    pub resume: Option<Value>,
    #[serde(default)]
    pub job_description: String,
}

/// POST /api/tailor
/// Tailors the resume to the job description and returns the DOCX.
pub async fn handle_tailor(
    State(state): State<AppState>,
    Json(req): Json<TailorRequest>,
) -> Result<Response, AppError> {
    let master = match req.resume {
        Some(raw) => normalize(&raw)?,
        None => {
            info!("No resume in request, using stored master resume");
            state
                .store
                .load()
                .await?
                .ok_or_else(|| AppError::NotFound("Master resume not found".to_string()))?
        }
    };

    let tailored = tailor_resume(
        &master,
        &req.job_description,
        &state.gemini,
        &state.case_studies,
    )
    .await?;
    docx_attachment(&tailored)
}
