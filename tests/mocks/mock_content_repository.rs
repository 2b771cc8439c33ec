use async_trait::async_trait;
use portfolio_mcp_server::error::{CatalogError, CatalogResult};
use portfolio_mcp_server::models::ContentItem;
use portfolio_mcp_server::repositories::ContentRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock catalog repository for testing.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContentRepository {
    items: Arc<Mutex<Vec<ContentItem>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ContentItem>) -> Self {
        let repo = Self::new();
        repo.add_items(items);
        repo
    }

    pub fn add_item(&self, item: ContentItem) {
        self.items.lock().unwrap().push(item);
    }

    pub fn add_items(&self, items: Vec<ContentItem>) {
        self.items.lock().unwrap().extend(items);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContentRepository for MockContentRepository {
    async fn list(&self) -> CatalogResult<Vec<ContentItem>> {
        self.increment_call_count("list");
        Ok(self.items.lock().unwrap().clone())
    }

    async fn get(&self, id: &str) -> CatalogResult<ContentItem> {
        self.increment_call_count("get");
        self.items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item.id == *id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }
}
