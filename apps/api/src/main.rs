mod config;
mod errors;
mod formatting;
mod llm_client;
mod parsing;
mod render;
mod resume;
mod routes;
mod state;
mod store;
mod tailoring;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::formatting::FormatterClient;
use crate::llm_client::{gemini::GEMINI_MODEL, GeminiClient, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::FileResumeStore;
use crate::tailoring::case_studies::load_case_studies;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume-tailor API v{}", env!("CARGO_PKG_VERSION"));

    let mut llm = LlmClient::new(config.anthropic_api_key.clone());
    if let Some(base_url) = &config.anthropic_base_url {
        llm = llm.with_base_url(base_url.clone());
    }
    if llm.has_api_key() {
        info!("Parsing client initialized (model: {})", llm_client::MODEL);
    } else {
        warn!("ANTHROPIC_API_KEY is not set; /api/parse will be unavailable");
    }

    let mut gemini = GeminiClient::new(config.gemini_api_key.clone());
    if let Some(base_url) = &config.gemini_base_url {
        gemini = gemini.with_base_url(base_url.clone());
    }
    if gemini.has_api_key() {
        info!("Tailoring client initialized (model: {GEMINI_MODEL})");
    } else {
        warn!("GEMINI_API_KEY is not set; /api/tailor will be unavailable");
    }

    let formatter = FormatterClient::new(config.formatter_url.clone());
    info!("Formatter service at {}", formatter.base_url());

    let store = FileResumeStore::new(config.master_resume_path.clone());
    info!("Master resume path: {}", store.path().display());

    let case_studies = load_case_studies(&config.case_studies_path).await;

    let state = AppState {
        llm,
        gemini,
        formatter,
        store: Arc::new(store),
        case_studies: Arc::new(case_studies),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
