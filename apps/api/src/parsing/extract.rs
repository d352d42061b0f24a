use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type '{0}'. Upload a .pdf, .txt or .md file")]
    UnsupportedType(String),

    #[error("Uploaded text file is not valid UTF-8")]
    InvalidUtf8,

    #[error("Could not read text from PDF: {0}")]
    Pdf(String),

    #[error("Uploaded file contains no text")]
    Empty,

    #[error("PDF extraction task failed: {0}")]
    Task(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    PlainText,
}

impl UploadKind {
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(UploadKind::Pdf),
            "txt" | "md" | "markdown" => Ok(UploadKind::PlainText),
            _ => Err(ExtractError::UnsupportedType(filename.to_string())),
        }
    }
}

/// Pulls plain text out of an uploaded resume file.
/// PDF extraction is CPU-bound and runs on the blocking pool.
pub async fn extract_upload_text(filename: &str, bytes: Vec<u8>) -> Result<String, ExtractError> {
    let text = match UploadKind::from_filename(filename)? {
        UploadKind::PlainText => String::from_utf8(bytes).map_err(|_| ExtractError::InvalidUtf8)?,
        UploadKind::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractError::Pdf(e.to_string()))
        })
        .await
        .map_err(|e| ExtractError::Task(e.to_string()))??,
    };

    if text.trim().is_empty() {
        return Err(ExtractError::Empty);
    }
    Ok(text)
}
