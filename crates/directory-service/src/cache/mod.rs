//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with an in-process TTL
//! implementation. Contact lookups and list views are cached read-through;
//! every write invalidates the affected keys.

mod cache_interface;
pub mod cache_keys;
mod clock;
mod memory_cache;
mod policy;

pub use cache_interface::{CacheExt, CacheInterface};
pub use clock::{Clock, ManualClock, SystemClock};
pub use memory_cache::MemoryCacheService;
pub use policy::{CachePolicy, DEFAULT_ITEM_TTL, DEFAULT_LIST_TTL};
