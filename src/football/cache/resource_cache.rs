//! LRU cache with a fixed TTL for one resolver resource

use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};

use super::types::{CacheInfo, CachedEntry};

/// Keyed memo of resource lists with a fixed TTL and a bounded key count.
///
/// Once `capacity` keys are held, inserting another evicts the least
/// recently used one. Keys are stored verbatim; callers decide on any
/// normalization.
#[derive(Debug)]
pub struct ResourceCache<T> {
    name: &'static str,
    ttl: Duration,
    entries: RwLock<LruCache<String, CachedEntry<Vec<T>>>>,
}

impl<T: Clone> ResourceCache<T> {
    pub fn new(name: &'static str, capacity: NonZeroUsize, ttl: Duration) -> Self {
        Self {
            name,
            ttl,
            entries: RwLock::new(LruCache::new(capacity)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Retrieves the cached list for `key` if present and not expired.
    /// A hit also marks the key as most recently used; an expired entry is removed.
    #[instrument(skip(self), fields(cache = self.name))]
    pub async fn get(&self, key: &str) -> Option<Vec<T>> {
        // LruCache::get updates recency, so even reads take the write lock
        let mut cache = self.entries.write().await;

        if let Some(cached_entry) = cache.get(key) {
            if !cached_entry.is_expired() {
                debug!(
                    "Cache hit: cache={}, key={}, items={}, expires_in={:?}",
                    self.name,
                    key,
                    cached_entry.data.len(),
                    cached_entry.time_until_expiry()
                );
                return Some(cached_entry.data.clone());
            }

            warn!(
                "Removing expired cache entry: cache={}, key={}, age={:?}, ttl={:?}",
                self.name,
                key,
                cached_entry.cached_at.elapsed(),
                self.ttl
            );
            cache.pop(key);
        } else {
            debug!("Cache miss: cache={}, key={}", self.name, key);
        }

        None
    }

    /// Stores `data` under `key`, replacing any previous entry and restarting its TTL
    #[instrument(skip(self, data), fields(cache = self.name))]
    pub async fn put(&self, key: &str, data: Vec<T>) {
        let item_count = data.len();
        let mut cache = self.entries.write().await;

        if let Some((evicted_key, _)) = cache.push(key.to_string(), CachedEntry::new(data, self.ttl))
            && evicted_key != key
        {
            debug!(
                "Evicted least recently used entry: cache={}, key={}",
                self.name, evicted_key
            );
        }

        info!(
            "Cached entry: cache={}, key={}, items={}, ttl={:?}",
            self.name, key, item_count, self.ttl
        );
    }

    /// Removes a single key; returns whether it was present
    pub async fn evict(&self, key: &str) -> bool {
        let removed = self.entries.write().await.pop(key).is_some();
        if removed {
            debug!("Evicted cache entry: cache={}, key={}", self.name, key);
        }
        removed
    }

    /// Removes every entry
    pub async fn clear(&self) {
        self.entries.write().await.clear();
        debug!("Cleared cache: cache={}", self.name);
    }

    /// Current size and capacity. Expired entries count until they are next read.
    pub async fn info(&self) -> CacheInfo {
        let cache = self.entries.read().await;
        CacheInfo {
            name: self.name,
            size: cache.len(),
            capacity: cache.cap().get(),
            ttl_seconds: self.ttl.as_secs(),
        }
    }
}
