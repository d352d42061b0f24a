//! Resume Parsing: free-form resume text in, normalized `ResumeDocument` out.
//!
//! Pipeline:
//! 1. `extract`: uploaded file → plain text (PDF via `pdf-extract`, txt/md as UTF-8)
//! 2. `prompts`: text → parse prompt embedding the target structure
//! 3. `LlmClient::call_json`: model output → `serde_json::Value`
//! 4. `resume::normalize`: repaired, schema-valid document
//! 5. `resume::validation::check_structure`: warnings for gaps the model left

pub mod extract;
pub mod handlers;
pub mod prompts;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::resume::schema::SectionKey;
use crate::resume::{normalize, ResumeDocument};

/// Headline numbers reported back after a parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseSummary {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub experience_count: usize,
    pub projects_count: usize,
    pub skills_count: usize,
    pub education_count: usize,
    pub awards_count: usize,
}

impl ParseSummary {
    pub fn from_document(doc: &ResumeDocument) -> Self {
        let basic = |field| doc.basic_str(field).unwrap_or_default().to_string();
        Self {
            name: basic("name"),
            headline: basic("headline"),
            email: basic("email"),
            experience_count: doc.items(SectionKey::Experience).len(),
            projects_count: doc.items(SectionKey::Projects).len(),
            skills_count: doc.items(SectionKey::Skills).len(),
            education_count: doc.items(SectionKey::Education).len(),
            awards_count: doc.items(SectionKey::Awards).len(),
        }
    }
}

/// Sends resume text through the parse prompt and normalizes the result.
pub async fn parse_resume_text(text: &str, llm: &LlmClient) -> Result<ResumeDocument, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("Resume text is required".to_string()));
    }

    let prompt = prompts::build_parse_prompt(text);
    let raw: Value = llm.call_json(&prompt, prompts::PARSE_SYSTEM).await?;
    let doc = normalize(&raw)?;

    info!(
        "Parsed resume for '{}': {} experience items",
        doc.basic_str("name").unwrap_or_default(),
        doc.items(SectionKey::Experience).len()
    );
    Ok(doc)
}
