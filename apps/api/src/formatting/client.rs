use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::llm_client::http_client;
use crate::resume::ExportDocument;

#[derive(Debug, Error)]
pub enum FormatterError {
    #[error("Formatter service unreachable: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Formatter service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Client for the sibling formatter service that turns export documents into
/// themed HTML or PDF.
#[derive(Clone)]
pub struct FormatterClient {
    client: Client,
    base_url: String,
}

impl FormatterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /api/render/html
    pub async fn render_html(&self, doc: &ExportDocument) -> Result<String, FormatterError> {
        let response = self.post("/api/render/html", doc).await?;
        Ok(response.text().await?)
    }

    /// POST /api/render/pdf
    pub async fn render_pdf(&self, doc: &ExportDocument) -> Result<Bytes, FormatterError> {
        let response = self.post("/api/render/pdf", doc).await?;
        Ok(response.bytes().await?)
    }

    async fn post(
        &self,
        path: &str,
        doc: &ExportDocument,
    ) -> Result<reqwest::Response, FormatterError> {
        let url = format!("{}{path}", self.base_url.trim_end_matches('/'));
        debug!("Formatter request: POST {url}");

        let response = self.client.post(&url).json(doc).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FormatterError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}
