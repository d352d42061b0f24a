pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::formatting::handlers as formatting;
use crate::parsing::handlers as parsing;
use crate::state::AppState;
use crate::store::handlers as store;
use crate::tailoring::handlers as tailoring;

/// Request bodies up to 10 MB (PDF uploads, large resumes).
const BODY_LIMIT: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/health", get(health::api_health_handler))
        // Parsing
        .route("/api/parse", post(parsing::handle_parse))
        .route("/api/parse/upload", post(parsing::handle_parse_upload))
        .route("/api/normalize", post(parsing::handle_normalize))
        // Tailoring
        .route("/api/tailor", post(tailoring::handle_tailor))
        // Rendering and export
        .route("/api/render/docx", post(formatting::handle_render_docx))
        .route("/api/render/html", post(formatting::handle_render_html))
        .route("/api/export", post(formatting::handle_export))
        .route("/api/format", post(formatting::handle_format))
        .route("/api/format/pdf", post(formatting::handle_format_pdf))
        // Master resume
        .route(
            "/api/master-resume",
            get(store::handle_get_master).post(store::handle_save_master),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .with_state(state)
}
