//! Master Resume Store: the single canonical resume shared across requests.
//!
//! Injected into `AppState` as `Arc<dyn ResumeStore>`:
//! - `FileResumeStore`: one pretty-printed JSON file on disk (production).
//! - `InMemoryResumeStore`: process-local, test builds only.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::resume::{ResumeDocument, ResumeError};

pub mod file;
pub mod handlers;
#[cfg(test)]
pub mod memory;

pub use file::FileResumeStore;
#[cfg(test)]
pub use memory::InMemoryResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Stored resume at {path} is not valid JSON: {source}")]
    Corrupt {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored resume at {path} is not a resume document: {source}")]
    Invalid {
        path: String,
        #[source]
        source: ResumeError,
    },

    #[error("Failed to encode resume: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Store task failed: {0}")]
    Task(String),
}

/// Where and when a save landed.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveReceipt {
    pub path: String,
    pub saved_at: DateTime<Utc>,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// The stored resume, `None` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<ResumeDocument>, StoreError>;

    /// Replaces the stored resume.
    async fn save(&self, doc: &ResumeDocument) -> Result<SaveReceipt, StoreError>;
}
