use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// One entry of the document library, as stored in the JSON manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub id: String,
    pub name: String,
    pub size_bytes: u64,
    pub uploaded_at: String,
}

pub fn load_manifest(path: &Path) -> Result<Vec<DocumentMeta>, AppError> {
    if !path.exists() {
        return Err(AppError::ManifestNotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path)?;
    let docs: Vec<DocumentMeta> = serde_json::from_str(&raw)?;
    info!("loaded {} documents from {}", docs.len(), path.display());
    Ok(docs)
}
