use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{ResumeStore, SaveReceipt, StoreError};
use crate::resume::{normalize, ResumeDocument};

/// Persists the master resume as a single JSON file.
///
/// Loading runs the document through `normalize`, so files written by older
/// producers are repaired on the way in. Saves go to a temp file in the same
/// directory and are renamed over the target, so readers never see a
/// half-written file.
pub struct FileResumeStore {
    path: PathBuf,
}

impl FileResumeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

#[async_trait]
impl ResumeStore for FileResumeStore {
    async fn load(&self) -> Result<Option<ResumeDocument>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No master resume at {}", self.display_path());
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.display_path(),
                    source,
                })
            }
        };

        let raw: Value = serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.display_path(),
            source,
        })?;
        let doc = normalize(&raw).map_err(|source| StoreError::Invalid {
            path: self.display_path(),
            source,
        })?;
        Ok(Some(doc))
    }

    async fn save(&self, doc: &ResumeDocument) -> Result<SaveReceipt, StoreError> {
        let mut json = serde_json::to_vec_pretty(doc)?;
        json.push(b'\n');

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomically(&path, &json))
            .await
            .map_err(|e| StoreError::Task(e.to_string()))??;

        info!("Master resume saved to {}", self.display_path());
        Ok(SaveReceipt {
            path: self.display_path(),
            saved_at: Utc::now(),
        })
    }
}

fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.display().to_string(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(io_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(contents).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = FileResumeStore::new(dir.path().join("resume.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let store = FileResumeStore::new(dir.path().join("nested").join("resume.json"));
        let doc = normalize(&json!({ "basics": { "name": "Ada", "headline": "Engineer" } })).unwrap();

        let receipt = store.save(&doc).await.unwrap();
        assert!(receipt.path.ends_with("resume.json"));

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous() {
        let dir = tempdir().unwrap();
        let store = FileResumeStore::new(dir.path().join("resume.json"));
        store
            .save(&normalize(&json!({ "basics": { "name": "Old" } })).unwrap())
            .await
            .unwrap();
        store
            .save(&normalize(&json!({ "basics": { "name": "New" } })).unwrap())
            .await
            .unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.basic_str("name"), Some("New"));
        // Only the target file remains; the temp file was renamed over it.
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn test_load_repairs_legacy_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(
            &path,
            r#"{"basics":{"name":"Ada","url":"https://ada.dev"},"sections":{"profiles":{"items":[{"network":"GitHub","url":"https://github.com/ada"}]}}}"#,
        )
        .unwrap();

        let doc = FileResumeStore::new(&path).load().await.unwrap().unwrap();
        assert_eq!(doc.basics()["url"]["href"], "https://ada.dev");
        assert_eq!(doc.sections().len(), 14);
    }

    #[tokio::test]
    async fn test_load_corrupt_file_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FileResumeStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[tokio::test]
    async fn test_load_non_object_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("resume.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = FileResumeStore::new(&path).load().await.unwrap_err();
        assert!(matches!(err, StoreError::Invalid { .. }));
    }
}
