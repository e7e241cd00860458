//! In-process TTL cache implementation.

use super::{CacheInterface, Clock, SystemClock};
use async_trait::async_trait;
use directory_core::DirectoryResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    generation: u64,
}

impl CacheState {
    fn insert(&mut self, key: &str, value: &str, expires_at: Instant) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    fn invalidate<F: Fn(&str) -> bool>(&mut self, matches: F) -> u64 {
        let before = self.entries.len();
        self.entries.retain(|key, _| !matches(key.as_str()));
        self.generation += 1;
        (before - self.entries.len()) as u64
    }
}

/// In-process cache with per-entry expiry.
///
/// Expired entries are never returned; they are dropped on the read that
/// finds them or by [`purge_expired`](Self::purge_expired). A single lock
/// guards the key space and no critical section awaits.
pub struct MemoryCacheService {
    /// `None` when caching is disabled.
    state: Option<RwLock<CacheState>>,
    clock: Arc<dyn Clock>,
}

impl MemoryCacheService {
    /// Create a new cache on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a cache that reads time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Some(RwLock::new(CacheState::default())),
            clock,
        }
    }

    /// Create a no-op cache: every read misses and nothing is stored.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            state: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Removes every expired entry and returns how many were removed.
    ///
    /// Expiry is not an invalidation, so the generation is left alone.
    pub fn purge_expired(&self) -> usize {
        let Some(state) = &self.state else {
            return 0;
        };

        let now = self.clock.now();
        let mut state = state.write();
        let before = state.entries.len();
        state.entries.retain(|_, entry| entry.expires_at > now);
        let purged = before - state.entries.len();

        if purged > 0 {
            debug!("Purged {} expired cache entries", purged);
        }
        purged
    }

    /// Number of stored entries, including expired ones not yet purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.as_ref().map_or(0, |state| state.read().entries.len())
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn expiry(&self, ttl: Duration) -> Instant {
        self.clock.now() + ttl
    }
}

impl Default for MemoryCacheService {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MemoryCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCacheService")
            .field("enabled", &self.state.is_some())
            .field("len", &self.len())
            .finish()
    }
}

fn matches_pattern(key: &str, pattern: &str) -> bool {
    match pattern.strip_suffix('*') {
        Some(prefix) => key.starts_with(prefix),
        None => key == pattern,
    }
}

#[async_trait]
impl CacheInterface for MemoryCacheService {
    fn is_enabled(&self) -> bool {
        self.state.is_some()
    }

    fn generation(&self) -> u64 {
        self.state.as_ref().map_or(0, |state| state.read().generation)
    }

    async fn get_raw(&self, key: &str) -> DirectoryResult<Option<String>> {
        let Some(state) = &self.state else {
            return Ok(None);
        };

        let now = self.clock.now();
        let expired = {
            let guard = state.read();
            match guard.entries.get(key) {
                Some(entry) if entry.expires_at > now => {
                    debug!("Cache hit for key '{}'", key);
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            let mut guard = state.write();
            if guard.entries.get(key).is_some_and(|entry| entry.expires_at <= now) {
                guard.entries.remove(key);
            }
            debug!("Cache entry expired for key '{}'", key);
        } else {
            debug!("Cache miss for key '{}'", key);
        }

        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> DirectoryResult<()> {
        let Some(state) = &self.state else {
            return Ok(());
        };

        let expires_at = self.expiry(ttl);
        state.write().insert(key, value, expires_at);

        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn set_raw_if_generation(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        generation: u64,
    ) -> DirectoryResult<bool> {
        let Some(state) = &self.state else {
            return Ok(false);
        };

        let expires_at = self.expiry(ttl);
        let mut state = state.write();
        if state.generation != generation {
            debug!(
                "Skipped caching key '{}': generation moved from {} to {}",
                key, generation, state.generation
            );
            return Ok(false);
        }

        state.insert(key, value, expires_at);
        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(true)
    }

    async fn delete(&self, key: &str) -> DirectoryResult<bool> {
        let Some(state) = &self.state else {
            return Ok(false);
        };

        let deleted = state.write().invalidate(|k| k == key) > 0;
        debug!("Deleted key '{}': {}", key, deleted);
        Ok(deleted)
    }

    async fn delete_pattern(&self, pattern: &str) -> DirectoryResult<u64> {
        let Some(state) = &self.state else {
            return Ok(0);
        };

        let deleted = state.write().invalidate(|key| matches_pattern(key, pattern));
        debug!("Deleted {} keys matching pattern '{}'", deleted, pattern);
        Ok(deleted)
    }

    async fn clear(&self) -> DirectoryResult<u64> {
        let Some(state) = &self.state else {
            return Ok(0);
        };

        let deleted = state.write().invalidate(|_| true);
        debug!("Cleared {} cache keys", deleted);
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{CacheExt, ManualClock};

    const TTL: Duration = Duration::from_secs(60);

    fn manual_cache() -> (Arc<ManualClock>, MemoryCacheService) {
        let clock = Arc::new(ManualClock::new());
        let cache = MemoryCacheService::with_clock(clock.clone());
        (clock, cache)
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCacheService::new();
        cache.set_raw("key1", "\"value1\"", TTL).await.unwrap();

        assert_eq!(cache.get_raw("key1").await.unwrap().as_deref(), Some("\"value1\""));
    }

    #[tokio::test]
    async fn test_miss() {
        let cache = MemoryCacheService::new();
        assert_eq!(cache.get_raw("nonexistent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite() {
        let cache = MemoryCacheService::new();
        cache.set("key1", &"old", TTL).await.unwrap();
        cache.set("key1", &"new", TTL).await.unwrap();

        assert_eq!(cache.get::<String>("key1").await.unwrap().as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_expiry_is_lazy_and_exact() {
        let (clock, cache) = manual_cache();
        cache.set("key1", &1_u32, TTL).await.unwrap();

        clock.advance(TTL - Duration::from_secs(1));
        assert_eq!(cache.get::<u32>("key1").await.unwrap(), Some(1));

        clock.advance(Duration::from_secs(1));
        assert_eq!(cache.get::<u32>("key1").await.unwrap(), None);
        assert!(cache.is_empty(), "expired entry is dropped on read");
    }

    #[tokio::test]
    async fn test_overwrite_resets_expiry() {
        let (clock, cache) = manual_cache();
        cache.set("key1", &1_u32, TTL).await.unwrap();
        clock.advance(Duration::from_secs(50));
        cache.set("key1", &2_u32, TTL).await.unwrap();
        clock.advance(Duration::from_secs(50));

        assert_eq!(cache.get::<u32>("key1").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let cache = MemoryCacheService::new();
        cache.set("key1", &1_u32, TTL).await.unwrap();

        assert!(cache.delete("key1").await.unwrap());
        assert!(!cache.delete("key1").await.unwrap());
        assert_eq!(cache.get::<u32>("key1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_pattern_with_trailing_wildcard() {
        let cache = MemoryCacheService::new();
        for key in ["all", "list:11", "list:21", "item:1"] {
            cache.set(key, &0_u32, TTL).await.unwrap();
        }

        assert_eq!(cache.delete_pattern("list:*").await.unwrap(), 2);
        assert!(cache.get_raw("all").await.unwrap().is_some());
        assert!(cache.get_raw("item:1").await.unwrap().is_some());
        assert!(!cache.get_raw("list:11").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_pattern_without_wildcard_is_exact() {
        let cache = MemoryCacheService::new();
        cache.set("list:1", &0_u32, TTL).await.unwrap();
        cache.set("list:11", &0_u32, TTL).await.unwrap();

        assert_eq!(cache.delete_pattern("list:1").await.unwrap(), 1);
        assert!(cache.get_raw("list:11").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = MemoryCacheService::new();
        cache.set("a", &1_u32, TTL).await.unwrap();
        cache.set("b", &2_u32, TTL).await.unwrap();

        assert_eq!(cache.clear().await.unwrap(), 2);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_every_invalidation_bumps_generation() {
        let cache = MemoryCacheService::new();
        let start = cache.generation();

        cache.delete("missing").await.unwrap();
        cache.delete_pattern("list:*").await.unwrap();
        cache.clear().await.unwrap();

        assert_eq!(cache.generation(), start + 3);

        cache.set("key1", &1_u32, TTL).await.unwrap();
        assert_eq!(cache.generation(), start + 3, "writes do not bump");
    }

    #[tokio::test]
    async fn test_stale_generation_is_rejected() {
        let cache = MemoryCacheService::new();
        let seen = cache.generation();

        cache.delete("item:1").await.unwrap();

        let stored = cache.set_if_generation("item:1", &"stale", TTL, seen).await.unwrap();
        assert!(!stored);
        assert_eq!(cache.get::<String>("item:1").await.unwrap(), None);

        let current = cache.generation();
        assert!(cache.set_if_generation("item:1", &"fresh", TTL, current).await.unwrap());
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let (clock, cache) = manual_cache();
        cache.set("short", &1_u32, Duration::from_secs(10)).await.unwrap();
        cache.set("long", &2_u32, Duration::from_secs(100)).await.unwrap();

        clock.advance(Duration::from_secs(10));
        assert_eq!(cache.purge_expired(), 1);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get::<u32>("long").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_disabled_cache() {
        let cache = MemoryCacheService::disabled();
        assert!(!cache.is_enabled());

        cache.set("key1", &1_u32, TTL).await.unwrap();
        assert_eq!(cache.get::<u32>("key1").await.unwrap(), None);
        assert!(!cache.set_if_generation("key1", &1_u32, TTL, 0).await.unwrap());
        assert_eq!(cache.delete_pattern("*").await.unwrap(), 0);
        assert_eq!(cache.purge_expired(), 0);
    }

    #[tokio::test]
    async fn test_concurrent_access() {
        let cache = Arc::new(MemoryCacheService::new());

        let tasks = (0..32_u32).map(|i| {
            let cache = Arc::clone(&cache);
            tokio::spawn(async move {
                let key = format!("item:{}", i % 4);
                cache.set(&key, &i, TTL).await.unwrap();
                let _ = cache.get::<u32>(&key).await.unwrap();
                if i % 8 == 0 {
                    cache.delete_pattern("item:*").await.unwrap();
                }
            })
        });

        for task in futures::future::join_all(tasks).await {
            task.unwrap();
        }
        assert!(cache.len() <= 4);
    }
}
