//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use directory_core::DirectoryResult;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
///
/// Every invalidation (`delete`, `delete_pattern`, `clear`) advances the
/// cache *generation*. A read-through populate records the generation before
/// it reads the store and inserts with [`set_raw_if_generation`], so a value
/// read before a concurrent write can never land in the cache after that
/// write's invalidation.
///
/// [`set_raw_if_generation`]: CacheInterface::set_raw_if_generation
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> DirectoryResult<Option<String>>;

    /// Set a raw JSON value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> DirectoryResult<()>;

    /// Set a raw JSON value only if no invalidation happened since `generation`.
    ///
    /// Returns `true` if the value was stored.
    async fn set_raw_if_generation(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        generation: u64,
    ) -> DirectoryResult<bool>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> DirectoryResult<bool>;

    /// Delete every key matching a pattern. A trailing `*` matches any suffix.
    ///
    /// Returns the number of keys deleted.
    async fn delete_pattern(&self, pattern: &str) -> DirectoryResult<u64>;

    /// Delete every key.
    ///
    /// Returns the number of keys deleted.
    async fn clear(&self) -> DirectoryResult<u64>;

    /// Returns the current invalidation generation.
    fn generation(&self) -> u64;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
///
/// This trait provides generic get/set methods that work with any serializable type.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> DirectoryResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> DirectoryResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Set a typed value only if no invalidation happened since `generation`.
    async fn set_if_generation<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
        generation: u64,
    ) -> DirectoryResult<bool> {
        let json = serde_json::to_string(value)?;
        self.set_raw_if_generation(key, &json, ttl, generation).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
