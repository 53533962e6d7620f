//! In-process result cache with lazy TTL expiry.
//!
//! Fallback backend for when Redis is unreachable at startup, and the cache
//! used by handler tests. Expired entries are dropped on the read path;
//! there is no background sweeper.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::ResultCache;

struct Entry {
    value: String,
    expires_at: Instant,
}

/// Result cache held entirely in process memory.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live (possibly expired, not yet collected) entries.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl ResultCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Some(entry.value.clone());
                }
                Some(_) => {}
                None => return None,
            }
        }
        // Entry exists but has expired; collect it under the write lock.
        self.entries.write().await.remove(key);
        None
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) {
        let entry = Entry {
            value: value.to_string(),
            expires_at: Instant::now() + Duration::from_secs(ttl_secs),
        };
        self.entries.write().await.insert(key.to_string(), entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get_within_ttl() {
        let cache = MemoryCache::new();
        cache.set("k", "plan text", 3600).await;
        assert_eq!(cache.get("k").await.as_deref(), Some("plan text"));
    }

    #[tokio::test]
    async fn test_missing_key_is_a_miss() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("absent").await, None);
    }

    #[tokio::test]
    async fn test_expired_entry_treated_as_absent_and_removed() {
        let cache = MemoryCache::new();
        cache.set("k", "plan text", 0).await;
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(cache.get("k").await, None);
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let cache = MemoryCache::new();
        cache.set("k", "first", 3600).await;
        cache.set("k", "second", 3600).await;
        assert_eq!(cache.get("k").await.as_deref(), Some("second"));
    }
}
