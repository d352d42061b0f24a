// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to every prompt that rewrites resume content.
pub const SOURCE_OF_TRUTH_INSTRUCTION: &str = "\
    CRITICAL: The master resume is the source of truth for dates, titles, employers and \
    core history. Never invent experiences, employers, degrees or metrics that are not \
    present in the material you were given.";

/// Rich-text conventions the renderer understands.
pub const RICH_TEXT_INSTRUCTION: &str = "\
    Rich-text fields (summary, description) use HTML: <p> for paragraphs, \
    <ul><li> for achievement bullets, <strong> for key phrases.";
