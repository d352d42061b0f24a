//! Tailoring: rewrites the master resume against a job description via Gemini.
//!
//! The model's output goes back through `normalize` before anything else sees
//! it, so a model that drops ids or flattens urls cannot break rendering.

pub mod case_studies;
pub mod handlers;
pub mod prompts;

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::GeminiClient;
use crate::resume::{normalize, ResumeDocument};
use case_studies::CaseStudy;

pub async fn tailor_resume(
    master: &ResumeDocument,
    job_description: &str,
    gemini: &GeminiClient,
    case_studies: &[CaseStudy],
) -> Result<ResumeDocument, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Job description is required".to_string(),
        ));
    }

    let master_json = serde_json::to_string_pretty(master)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to encode master resume: {e}")))?;
    let prompt = prompts::build_tailor_prompt(&master_json, job_description, case_studies);

    let raw: Value = gemini.generate_json(&prompt).await?;
    let tailored = normalize(&raw)?;

    info!(
        "Tailored resume: headline '{}'",
        tailored.basic_str("headline").unwrap_or_default()
    );
    Ok(tailored)
}
