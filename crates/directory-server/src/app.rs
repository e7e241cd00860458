//! Application builder.

use crate::{di::AppModule, startup};
use directory_config::AppConfig;
use directory_core::{DirectoryError, DirectoryResult};
use directory_repository::DatabasePoolInterface;
use directory_rest::{create_router, AppState};
use directory_service::MemoryCacheService;
use std::{sync::Arc, time::Duration};
use tokio::{signal, task::JoinHandle};
use tracing::{debug, info};

/// Application builder for constructing and running the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the components, serves HTTP until a shutdown signal arrives,
    /// then releases the store.
    pub async fn run(self) -> DirectoryResult<()> {
        let config = self.config.unwrap_or_default();

        let module = AppModule::build(&config).await?;
        let sweeper = config
            .cache
            .sweep_interval()
            .filter(|_| config.cache.enabled)
            .map(|period| spawn_cache_sweeper(module.cache(), period));

        let state = AppState::new(module.contact_service()).with_database(module.pool());
        let router = create_router(state, &config.server);

        let rest_addr = config.server.rest_addr();
        let listener = tokio::net::TcpListener::bind(&rest_addr)
            .await
            .map_err(|e| DirectoryError::internal(format!("Failed to bind REST: {e}")))?;

        startup::print_startup_info(&rest_addr);

        let served = axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| DirectoryError::internal(format!("REST server error: {e}")));

        if let Some(sweeper) = sweeper {
            sweeper.abort();
        }
        module.pool().close().await;

        served?;
        info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Periodically drops expired entries from the cache.
///
/// Reads already ignore expired entries; the sweep only bounds memory.
pub fn spawn_cache_sweeper(cache: Arc<MemoryCacheService>, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        // The first tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let purged = cache.purge_expired();
            if purged > 0 {
                debug!(purged, "Purged expired cache entries");
            }
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_service::{CacheExt, ManualClock};

    #[test]
    fn test_app_builder_default() {
        let builder = AppBuilder::default();
        assert!(builder.config.is_none());
    }

    #[test]
    fn test_app_builder_with_config() {
        let builder = AppBuilder::new().with_config(AppConfig::default());
        assert!(builder.config.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sweeper_purges_expired_entries() {
        let clock = Arc::new(ManualClock::new());
        let cache = Arc::new(MemoryCacheService::with_clock(clock.clone()));
        cache.set("item:1", &1_i64, Duration::from_secs(5)).await.unwrap();
        cache.set("item:2", &2_i64, Duration::from_secs(500)).await.unwrap();

        let sweeper = spawn_cache_sweeper(Arc::clone(&cache), Duration::from_secs(60));
        clock.advance(Duration::from_secs(10));
        tokio::time::sleep(Duration::from_secs(61)).await;

        assert_eq!(cache.len(), 1);
        sweeper.abort();
    }
}
