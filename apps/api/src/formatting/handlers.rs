use axum::{
    extract::State,
    response::{Html, Response},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::formatting::{attachment, docx_attachment, PDF_CONTENT_TYPE};
use crate::render::{self, html::to_html};
use crate::resume::{normalize, to_export_schema, ExportDocument};
use crate::state::AppState;

/// POST /api/render/docx
/// Resume JSON in, ATS-friendly DOCX out. No tailoring.
pub async fn handle_render_docx(Json(raw): Json<Value>) -> Result<Response, AppError> {
    docx_attachment(&normalize(&raw)?)
}

/// POST /api/render/html
/// Same block layout as the DOCX, as a standalone HTML page.
pub async fn handle_render_html(Json(raw): Json<Value>) -> Result<Html<String>, AppError> {
    let doc = normalize(&raw)?;
    Ok(Html(to_html(&render::render(&doc)?)))
}

/// POST /api/export
pub async fn handle_export(Json(raw): Json<Value>) -> Result<Json<ExportDocument>, AppError> {
    Ok(Json(to_export_schema(&normalize(&raw)?)))
}

/// POST /api/format
/// Proxies the export document to the formatter service and returns its HTML.
pub async fn handle_format(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Html<String>, AppError> {
    let export = to_export_schema(&normalize(&raw)?);
    let html = state.formatter.render_html(&export).await?;
    Ok(Html(html))
}

/// POST /api/format/pdf
pub async fn handle_format_pdf(
    State(state): State<AppState>,
    Json(raw): Json<Value>,
) -> Result<Response, AppError> {
    let doc = normalize(&raw)?;
    let filename = render::output_filename(&doc, "pdf")?;
    let pdf = state.formatter.render_pdf(&to_export_schema(&doc)).await?;
    attachment(pdf, PDF_CONTENT_TYPE, &filename)
}
