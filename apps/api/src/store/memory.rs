use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{ResumeStore, SaveReceipt, StoreError};
use crate::resume::ResumeDocument;

const MEMORY_PATH: &str = "memory://master-resume";

#[derive(Default)]
pub struct InMemoryResumeStore {
    doc: RwLock<Option<ResumeDocument>>,
}

impl InMemoryResumeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(doc: ResumeDocument) -> Self {
        Self {
            doc: RwLock::new(Some(doc)),
        }
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn load(&self) -> Result<Option<ResumeDocument>, StoreError> {
        Ok(self.doc.read().await.clone())
    }

    async fn save(&self, doc: &ResumeDocument) -> Result<SaveReceipt, StoreError> {
        *self.doc.write().await = Some(doc.clone());
        Ok(SaveReceipt {
            path: MEMORY_PATH.to_string(),
            saved_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::normalize;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_store_loads_none() {
        assert!(InMemoryResumeStore::new().load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_document() {
        let store = InMemoryResumeStore::with_document(
            normalize(&json!({ "basics": { "name": "Old" } })).unwrap(),
        );
        let doc = normalize(&json!({ "basics": { "name": "New" } })).unwrap();
        let receipt = store.save(&doc).await.unwrap();

        assert_eq!(receipt.path, MEMORY_PATH);
        assert_eq!(store.load().await.unwrap(), Some(doc));
    }
}
