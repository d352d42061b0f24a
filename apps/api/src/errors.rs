use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::formatting::FormatterError;
use crate::llm_client::LlmError;
use crate::resume::ResumeError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error(transparent)]
    Resume(#[from] ResumeError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Formatter error: {0}")]
    Formatter(#[from] FormatterError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::Resume(e @ ResumeError::NotAnObject { .. }) => {
                (StatusCode::BAD_REQUEST, "INVALID_RESUME", e.to_string())
            }
            AppError::Resume(e @ ResumeError::RequiredFieldMissing { .. }) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MISSING_REQUIRED_FIELD",
                e.to_string(),
            ),
            AppError::Resume(e @ ResumeError::Serialize(_)) => {
                tracing::error!("Document serialization error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "Failed to produce the document".to_string(),
                )
            }
            AppError::Llm(e @ LlmError::MissingApiKey { .. }) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "LLM_NOT_CONFIGURED",
                    e.to_string(),
                )
            }
            AppError::Llm(e @ LlmError::Parse(_)) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_INVALID_RESPONSE",
                    "The AI returned output that is not valid JSON".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Store(e) => {
                tracing::error!("Storage error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
                )
            }
            AppError::Formatter(e) => {
                tracing::error!("Formatter error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "FORMATTER_ERROR",
                    "The formatter service failed to render the resume".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_field_is_422() {
        let (status, body) = render(AppError::Resume(ResumeError::RequiredFieldMissing {
            field: "basics.name",
        }))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "MISSING_REQUIRED_FIELD");
        assert_eq!(
            body["error"]["message"],
            "Required field 'basics.name' is missing"
        );
    }

    #[tokio::test]
    async fn test_not_an_object_is_400() {
        let (status, body) =
            render(AppError::Resume(ResumeError::NotAnObject { found: "array" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_RESUME");
    }

    #[tokio::test]
    async fn test_upstream_detail_is_hidden() {
        let (status, body) = render(AppError::Formatter(FormatterError::Status {
            status: 500,
            body: "stack trace".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("stack trace"));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_503() {
        let (status, body) = render(AppError::Llm(LlmError::MissingApiKey {
            provider: "Gemini",
        }))
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["message"], "Gemini API key is not configured");
    }
}
