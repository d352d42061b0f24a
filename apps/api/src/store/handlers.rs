use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::resume::{normalize, ResumeDocument};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MasterResumeResponse {
    pub success: bool,
    pub data: ResumeDocument,
}

#[derive(Debug, Deserialize)]
pub struct SaveMasterRequest {
    #[serde(default)]
    pub resume: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMasterResponse {
    pub success: bool,
    pub message: String,
    pub saved_at: DateTime<Utc>,
}

/// GET /api/master-resume
pub async fn handle_get_master(
    State(state): State<AppState>,
) -> Result<Json<MasterResumeResponse>, AppError> {
    let doc = state
        .store
        .load()
        .await?
        .ok_or_else(|| AppError::NotFound("Master resume not found".to_string()))?;
    Ok(Json(MasterResumeResponse {
        success: true,
        data: doc,
    }))
}

/// POST /api/master-resume
/// Normalizes before saving, so the stored file is always schema-valid.
pub async fn handle_save_master(
    State(state): State<AppState>,
    Json(req): Json<SaveMasterRequest>,
) -> Result<Json<SaveMasterResponse>, AppError> {
    let raw = req
        .resume
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::Validation("Resume data is required".to_string()))?;
    let receipt = state.store.save(&normalize(&raw)?).await?;
    Ok(Json(SaveMasterResponse {
        success: true,
        message: "Master resume saved successfully".to_string(),
        saved_at: receipt.saved_at,
    }))
}
