//! Application state for REST handlers.

use directory_repository::DatabasePoolInterface;
use directory_service::ContactService;
use std::sync::Arc;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Contact service
    pub contact_service: Arc<dyn ContactService>,
    /// Store probed by `/health`; absent when the service is not store-backed.
    pub database: Option<Arc<dyn DatabasePoolInterface>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(contact_service: Arc<dyn ContactService>) -> Self {
        Self {
            contact_service,
            database: None,
        }
    }

    /// Adds the store that `/health` checks.
    #[must_use]
    pub fn with_database(mut self, database: Arc<dyn DatabasePoolInterface>) -> Self {
        self.database = Some(database);
        self
    }
}
