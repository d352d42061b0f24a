use std::sync::Arc;

use crate::formatting::FormatterClient;
use crate::llm_client::{GeminiClient, LlmClient};
use crate::store::ResumeStore;
use crate::tailoring::case_studies::CaseStudy;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Anthropic client used for parsing.
    pub llm: LlmClient,
    /// Gemini client used for tailoring.
    pub gemini: GeminiClient,
    pub formatter: FormatterClient,
    /// Master resume store. Default: `FileResumeStore` at `MASTER_RESUME_PATH`.
    pub store: Arc<dyn ResumeStore>,
    /// Loaded once at startup; empty when the file is missing or unreadable.
    pub case_studies: Arc<Vec<CaseStudy>>,
}
