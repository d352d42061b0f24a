//! Formatting: everything that turns a resume into a deliverable: the local
//! DOCX/HTML renderers, the export-schema view, and the external formatter
//! service for themed HTML and PDF.

pub mod client;
pub mod handlers;

use axum::{
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use bytes::Bytes;

pub use client::{FormatterClient, FormatterError};

use crate::errors::AppError;
use crate::render::{self, docx::to_docx};
use crate::resume::ResumeDocument;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Renders `doc` to DOCX and wraps it as a download.
pub fn docx_attachment(doc: &ResumeDocument) -> Result<Response, AppError> {
    let blocks = render::render(doc)?;
    let filename = render::output_filename(doc, "docx")?;
    let bytes = to_docx(&blocks)?;
    tracing::info!("Sending DOCX file: {} ({} bytes)", filename, bytes.len());
    attachment(Bytes::from(bytes), DOCX_CONTENT_TYPE, &filename)
}

pub fn attachment(body: Bytes, content_type: &'static str, filename: &str) -> Result<Response, AppError> {
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid filename header: {e}")))?;
    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
