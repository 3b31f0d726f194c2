//! In-memory cache implementation - used as fallback when Redis is unavailable.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use leadscout_core::ports::{Cache, CacheError};

struct Entry {
    value: String,
    stored_at: Instant,
    ttl: Option<Duration>,
}

impl Entry {
    fn expired(&self) -> bool {
        match self.ttl {
            Some(ttl) => self.stored_at.elapsed() >= ttl,
            None => false,
        }
    }
}

/// In-memory cache over a HashMap with an async RwLock.
///
/// Expiry is logical: a `get` past the entry's TTL behaves as a miss and
/// drops the entry. Data is lost on process restart.
pub struct InMemoryCache {
    store: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.read().await;
        let entry = store.get(key)?;

        if entry.expired() {
            drop(store);
            // Physically remove the expired entry under a write lock.
            let mut store = self.store.write().await;
            store.remove(key);
            return None;
        }

        Some(entry.value.clone())
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut store = self.store.write().await;

        store.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                stored_at: Instant::now(),
                ttl,
            },
        );

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> bool {
        self.get(key).await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_and_get() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();
        assert_eq!(cache.get("key1").await, Some("value1".to_string()));
    }

    #[tokio::test]
    async fn delete_removes_entry() {
        let cache = InMemoryCache::new();
        cache.set("key1", "value1", None).await.unwrap();
        cache.delete("key1").await.unwrap();
        assert_eq!(cache.get("key1").await, None);
    }

    #[tokio::test]
    async fn entry_past_ttl_reads_as_miss() {
        let cache = InMemoryCache::new();
        cache
            .set("key1", "value1", Some(Duration::from_millis(30)))
            .await
            .unwrap();
        assert_eq!(cache.get("key1").await, Some("value1".to_string()));

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(cache.get("key1").await, None);
        assert!(!cache.exists("key1").await);
    }

    #[tokio::test]
    async fn overwrite_resets_ttl() {
        let cache = InMemoryCache::new();
        cache
            .set("key1", "old", Some(Duration::from_millis(30)))
            .await
            .unwrap();
        cache
            .set("key1", "new", Some(Duration::from_secs(60)))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(cache.get("key1").await, Some("new".to_string()));
    }
}
