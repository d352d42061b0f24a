use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Only `PORT` can fail startup; API keys are optional and checked per call.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    /// Overrides for proxies and gateways; unset means the public endpoints.
    pub anthropic_base_url: Option<String>,
    pub gemini_base_url: Option<String>,
    pub master_resume_path: PathBuf,
    pub case_studies_path: PathBuf,
    pub formatter_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            anthropic_base_url: optional_env("ANTHROPIC_BASE_URL"),
            gemini_base_url: optional_env("GEMINI_BASE_URL"),
            master_resume_path: env_or("MASTER_RESUME_PATH", "resume.json").into(),
            case_studies_path: env_or("CASE_STUDIES_PATH", "case-studies.json").into(),
            formatter_url: env_or("FORMATTER_URL", "http://localhost:3002"),
            port: env_or("PORT", "3000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

/// Unset and blank are treated the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}
