//! Expiry policy for cached contact views.

use directory_config::CacheConfig;
use std::time::Duration;

/// Default TTL for single-contact entries (5 minutes).
pub const DEFAULT_ITEM_TTL: Duration = Duration::from_secs(300);

/// Default TTL for list entries (10 minutes).
pub const DEFAULT_LIST_TTL: Duration = Duration::from_secs(600);

/// TTLs applied when the service populates the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    /// TTL of `item:<id>` entries.
    pub item_ttl: Duration,
    /// TTL of `all` and `list:<areaCode>` entries.
    pub list_ttl: Duration,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            item_ttl: DEFAULT_ITEM_TTL,
            list_ttl: DEFAULT_LIST_TTL,
        }
    }
}

impl From<&CacheConfig> for CachePolicy {
    fn from(config: &CacheConfig) -> Self {
        Self {
            item_ttl: config.item_ttl(),
            list_ttl: config.list_ttl(),
        }
    }
}
