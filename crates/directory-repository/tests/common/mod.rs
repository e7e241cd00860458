//! Common test infrastructure for database integration tests.

use directory_config::DatabaseConfig;
use directory_repository::{DatabasePool, DatabasePoolInterface};
use std::sync::Arc;

/// Test database wrapper.
///
/// Each instance owns a private in-memory SQLite database with the
/// migrations applied, so tests never share state.
pub struct TestDatabase {
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Creates a fresh, migrated in-memory database.
    pub async fn new() -> Self {
        let pool = DatabasePool::new(&DatabaseConfig::in_memory())
            .await
            .expect("Failed to open in-memory database");

        pool.run_migrations()
            .await
            .expect("Failed to run migrations");

        Self {
            pool: Arc::new(pool),
        }
    }

    /// Returns a handle to the database pool.
    pub fn pool(&self) -> Arc<dyn DatabasePoolInterface> {
        Arc::clone(&self.pool) as Arc<dyn DatabasePoolInterface>
    }
}
