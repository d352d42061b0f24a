use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::parsing::extract::{extract_upload_text, ExtractError};
use crate::parsing::{parse_resume_text, ParseSummary};
use crate::resume::validation::{check_structure, StructureWarning};
use crate::resume::{normalize, ResumeDocument};
use crate::state::AppState;

/// Multipart field names accepted for the uploaded file.
const UPLOAD_FIELDS: [&str; 2] = ["file", "resume"];

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub success: bool,
    pub data: ResumeDocument,
    pub summary: ParseSummary,
    pub warnings: Vec<StructureWarning>,
}

impl ParseResponse {
    fn from_document(doc: ResumeDocument) -> Self {
        let summary = ParseSummary::from_document(&doc);
        let warnings = check_structure(&doc).warnings;
        Self {
            success: true,
            data: doc,
            summary,
            warnings,
        }
    }
}

/// POST /api/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    Json(req): Json<ParseRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    let doc = parse_resume_text(&req.resume_text, &state.llm).await?;
    Ok(Json(ParseResponse::from_document(doc)))
}

/// POST /api/parse/upload
/// Multipart form with a single `file` field (.pdf, .txt or .md).
pub async fn handle_parse_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if !field.name().is_some_and(|name| UPLOAD_FIELDS.contains(&name)) {
            continue;
        }

        let filename = field.file_name().unwrap_or("resume.txt").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;
        info!("Received upload '{}' ({} bytes)", filename, bytes.len());

        let text = extract_upload_text(&filename, bytes.to_vec())
            .await
            .map_err(extract_error)?;
        let doc = parse_resume_text(&text, &state.llm).await?;
        return Ok(Json(ParseResponse::from_document(doc)));
    }

    Err(AppError::Validation(
        "Multipart body must contain a 'file' field".to_string(),
    ))
}

/// POST /api/normalize
/// Any JSON object in, schema-valid resume out. No LLM involved.
pub async fn handle_normalize(Json(raw): Json<Value>) -> Result<Json<ResumeDocument>, AppError> {
    Ok(Json(normalize(&raw)?))
}

fn extract_error(err: ExtractError) -> AppError {
    match err {
        ExtractError::UnsupportedType(_) | ExtractError::InvalidUtf8 | ExtractError::Empty => {
            AppError::Validation(err.to_string())
        }
        ExtractError::Pdf(_) => AppError::UnprocessableEntity(err.to_string()),
        ExtractError::Task(_) => AppError::Internal(anyhow::anyhow!(err)),
    }
}
