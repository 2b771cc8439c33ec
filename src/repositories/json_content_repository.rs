use crate::error::{CatalogError, CatalogResult};
use crate::models::ContentItem;
use crate::repositories::traits::ContentRepository;
use async_trait::async_trait;
use std::path::PathBuf;

/// Catalog repository backed by a JSON seed file.
///
/// The file holds a JSON array of case studies. It is re-read on every call
/// on tokio's blocking pool; callers that need to avoid the disk read go
/// through the catalog service's cache.
#[derive(Debug, Clone)]
pub struct JsonContentRepository {
    path: PathBuf,
}

impl JsonContentRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(path: &PathBuf) -> CatalogResult<Vec<ContentItem>> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Io(format!("{}: {}", path.display(), e)))?;
        let items: Vec<ContentItem> = serde_json::from_str(&raw)?;
        Ok(items)
    }
}

#[async_trait]
impl ContentRepository for JsonContentRepository {
    async fn list(&self) -> CatalogResult<Vec<ContentItem>> {
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || Self::read_all(&path))
            .await
            .map_err(|e| CatalogError::Other(format!("Task join error: {}", e)))?
    }

    async fn get(&self, id: &str) -> CatalogResult<ContentItem> {
        self.list()
            .await?
            .into_iter()
            .find(|item| item.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
