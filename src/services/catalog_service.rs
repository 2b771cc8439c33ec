//! Case-study catalog service.
//!
//! Listing, lookup and related-content ranking over a cached copy of the
//! catalog.

use crate::cache::TimedCache;
use crate::error::{CatalogError, CatalogResult};
use crate::models::ContentItem;
use crate::ranking::{RelatedContentRanker, RelatedMatch, DEFAULT_MAX_RESULTS};
use crate::repositories::ContentRepository;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const CATALOG_KEY: &str = "catalog";

/// Upper bound on `max_results` accepted from callers.
pub const MAX_RELATED_LIMIT: usize = 20;

/// Catalog service trait for business operations.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Catalog items, optionally restricted to one service type and/or
    /// featured items, in storage order.
    async fn list_case_studies(
        &self,
        service_type: Option<&str>,
        featured_only: bool,
    ) -> CatalogResult<Vec<ContentItem>>;

    async fn get_case_study(&self, id: &str) -> CatalogResult<ContentItem>;

    /// Items related to `id`, best first.
    async fn find_related(
        &self,
        id: &str,
        max_results: Option<usize>,
    ) -> CatalogResult<Vec<RelatedMatch>>;

    /// Drop the cached catalog so the next call reloads it.
    fn invalidate_cache(&self);
}

/// Default implementation of CatalogService.
pub struct CatalogServiceImpl {
    repository: Arc<dyn ContentRepository>,
    cache: TimedCache<&'static str, Arc<Vec<ContentItem>>>,
    ranker: RelatedContentRanker,
    default_max_results: usize,
}

impl CatalogServiceImpl {
    pub fn new(repository: Arc<dyn ContentRepository>, cache_ttl: Duration) -> Self {
        Self {
            repository,
            cache: TimedCache::new(cache_ttl),
            ranker: RelatedContentRanker::new(),
            default_max_results: DEFAULT_MAX_RESULTS,
        }
    }

    pub fn with_default_max_results(mut self, max_results: usize) -> Self {
        self.default_max_results = max_results;
        self
    }

    async fn catalog(&self) -> CatalogResult<Arc<Vec<ContentItem>>> {
        if let Some(items) = self.cache.get(&CATALOG_KEY) {
            return Ok(items);
        }

        let items = Arc::new(self.repository.list().await?);
        debug!(count = items.len(), "Loaded case-study catalog");
        self.cache.insert(CATALOG_KEY, Arc::clone(&items));
        Ok(items)
    }

    fn validate_id(id: &str) -> CatalogResult<&str> {
        let id = id.trim();
        if id.is_empty() {
            return Err(CatalogError::InvalidParameters(
                "id cannot be empty".to_string(),
            ));
        }
        Ok(id)
    }
}

/// Service types compare ignoring case and `-`/`_` spelling.
fn same_service_type(a: &str, b: &str) -> bool {
    let normalize = |s: &str| s.trim().to_ascii_lowercase().replace('-', "_");
    normalize(a) == normalize(b)
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_case_studies(
        &self,
        service_type: Option<&str>,
        featured_only: bool,
    ) -> CatalogResult<Vec<ContentItem>> {
        let catalog = self.catalog().await?;

        Ok(catalog
            .iter()
            .filter(|item| !featured_only || item.featured)
            .filter(|item| service_type.map_or(true, |s| same_service_type(&item.service_type, s)))
            .cloned()
            .collect())
    }

    async fn get_case_study(&self, id: &str) -> CatalogResult<ContentItem> {
        let id = Self::validate_id(id)?;

        // Single lookups don't warm the cache; go straight to the repository.
        let Some(catalog) = self.cache.get(&CATALOG_KEY) else {
            return self.repository.get(id).await;
        };

        catalog
            .iter()
            .find(|item| item.id == *id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn find_related(
        &self,
        id: &str,
        max_results: Option<usize>,
    ) -> CatalogResult<Vec<RelatedMatch>> {
        let id = Self::validate_id(id)?;
        let max_results = max_results.unwrap_or(self.default_max_results);
        if max_results > MAX_RELATED_LIMIT {
            return Err(CatalogError::InvalidParameters(format!(
                "max_results must be at most {}",
                MAX_RELATED_LIMIT
            )));
        }

        let catalog = self.catalog().await?;
        let current = catalog
            .iter()
            .find(|item| item.id == *id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        Ok(self.ranker.rank(current, &catalog, max_results))
    }

    fn invalidate_cache(&self) {
        self.cache.clear();
    }
}
