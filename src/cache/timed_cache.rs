//! Time-based cache with TTL (Time To Live) support.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// A thread-safe map whose entries expire `ttl` after insertion.
///
/// Clones share storage. Expired entries are ignored by [`get`](Self::get)
/// and only dropped by an overwrite or [`clear`](Self::clear).
/// Wrap large values in `Arc` so `get` stays cheap.
#[derive(Clone)]
pub struct TimedCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    entries: Arc<RwLock<HashMap<K, (Instant, V)>>>,
    ttl: Duration,
}

impl<K, V> TimedCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Insert or replace a value, restarting its TTL.
    pub fn insert(&self, key: K, value: V) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key, (Instant::now(), value));
        }
    }

    /// The value for `key` if present and younger than the TTL.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().ok()?;
        entries
            .get(key)
            .filter(|(inserted_at, _)| inserted_at.elapsed() < self.ttl)
            .map(|(_, value)| value.clone())
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V> std::fmt::Debug for TimedCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_insert_get_and_clear() {
        let cache = TimedCache::new(Duration::from_secs(60));
        cache.insert("catalog", 1);

        assert_eq!(cache.get(&"catalog"), Some(1));
        assert_eq!(cache.get(&"other"), None);

        cache.clear();
        assert_eq!(cache.get(&"catalog"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_entries_expire() {
        let cache = TimedCache::new(Duration::from_millis(30));
        cache.insert("catalog", "v1");
        assert_eq!(cache.get(&"catalog"), Some("v1"));

        thread::sleep(Duration::from_millis(60));

        assert_eq!(cache.get(&"catalog"), None);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_overwrite_restarts_ttl() {
        let cache = TimedCache::new(Duration::from_millis(80));
        cache.insert("catalog", "v1");
        thread::sleep(Duration::from_millis(50));
        cache.insert("catalog", "v2");
        thread::sleep(Duration::from_millis(50));

        assert_eq!(cache.get(&"catalog"), Some("v2"));
    }

    #[test]
    fn test_clones_share_storage() {
        let cache1 = TimedCache::new(Duration::from_secs(300));
        let cache2 = cache1.clone();
        cache2.insert("catalog".to_string(), 7);

        assert_eq!(cache1.get(&"catalog".to_string()), Some(7));

        cache1.clear();
        assert!(cache2.is_empty());
    }
}
