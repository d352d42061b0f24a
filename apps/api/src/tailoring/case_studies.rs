use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A write-up of one piece of past work, used to add detail and metrics to
/// tailored bullets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub challenge: String,
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<String>,
}

/// Loads the case-study file: a JSON object of `key → CaseStudy`.
///
/// A missing or malformed file yields no case studies; tailoring works
/// without them.
pub async fn load_case_studies(path: &Path) -> Vec<CaseStudy> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Could not read case studies at {}: {e}", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_slice::<BTreeMap<String, CaseStudy>>(&bytes) {
        Ok(map) => {
            info!("Loaded {} case studies from {}", map.len(), path.display());
            map.into_values().collect()
        }
        Err(e) => {
            warn!("Ignoring malformed case studies at {}: {e}", path.display());
            Vec::new()
        }
    }
}
