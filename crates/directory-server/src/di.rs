//! Dependency wiring.
//!
//! [`AppModule`] owns every long-lived component and hands out the trait
//! objects the REST layer depends on:
//!
//! ```text
//! DatabasePool ──► SqliteContactRepository ──┐
//!                                            ├──► ContactServiceImpl
//! MemoryCacheService (+ CachePolicy) ────────┘
//! ```

use directory_config::{AppConfig, CacheConfig};
use directory_core::DirectoryResult;
use directory_repository::{
    create_pool, ContactRepository, DatabasePool, DatabasePoolInterface, SqliteContactRepository,
};
use directory_service::{
    CacheInterface, CachePolicy, ContactService, ContactServiceImpl, MemoryCacheService,
};
use std::sync::Arc;
use tracing::info;

/// Container of the application's components.
pub struct AppModule {
    pool: Arc<DatabasePool>,
    cache: Arc<MemoryCacheService>,
    contact_service: Arc<dyn ContactService>,
}

impl AppModule {
    /// Connects to the store, applies migrations when configured, and wires
    /// the cache and service on top.
    pub async fn build(config: &AppConfig) -> DirectoryResult<Self> {
        let pool = create_pool(&config.database).await?;

        if config.database.run_migrations {
            pool.run_migrations().await?;
        }

        Ok(Self::from_pool(pool, &config.cache))
    }

    /// Wires the cache and service on top of an existing pool.
    pub fn from_pool(pool: Arc<DatabasePool>, cache_config: &CacheConfig) -> Self {
        let cache = Arc::new(build_cache(cache_config));

        let repository: Arc<dyn ContactRepository> = Arc::new(SqliteContactRepository::new(
            Arc::clone(&pool) as Arc<dyn DatabasePoolInterface>,
        ));

        let contact_service: Arc<dyn ContactService> = Arc::new(ContactServiceImpl::with_policy(
            repository,
            Arc::clone(&cache) as Arc<dyn CacheInterface>,
            CachePolicy::from(cache_config),
        ));

        Self {
            pool,
            cache,
            contact_service,
        }
    }

    /// Returns the contact service.
    pub fn contact_service(&self) -> Arc<dyn ContactService> {
        Arc::clone(&self.contact_service)
    }

    /// Returns the cache.
    pub fn cache(&self) -> Arc<MemoryCacheService> {
        Arc::clone(&self.cache)
    }

    /// Returns the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }
}

fn build_cache(config: &CacheConfig) -> MemoryCacheService {
    if config.enabled {
        info!(
            item_ttl_secs = config.item_ttl_secs,
            list_ttl_secs = config.list_ttl_secs,
            "In-memory cache enabled"
        );
        MemoryCacheService::new()
    } else {
        info!("Cache disabled; every read goes to the store");
        MemoryCacheService::disabled()
    }
}
