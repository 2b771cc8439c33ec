use crate::error::CatalogResult;
use crate::models::ContentItem;
use async_trait::async_trait;

/// Read access to the case-study catalog.
///
/// Provides abstraction over where catalog data lives, enabling different
/// implementations (seed file, database, mock).
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// All catalog items in storage order.
    async fn list(&self) -> CatalogResult<Vec<ContentItem>>;

    /// A single item by id.
    async fn get(&self, id: &str) -> CatalogResult<ContentItem>;
}
