//! # Contact Directory Server
//!
//! Loads configuration, sets up logging, and serves the REST API.

use directory_config::{ConfigLoader, ObservabilityConfig};
use directory_core::DirectoryResult;
use directory_server::{logging::init_logging, startup, AppBuilder};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> DirectoryResult<()> {
    let config_loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            return Err(e);
        }
    };
    let config = config_loader.get().clone();

    init_logging(&config.observability);
    startup::print_banner(&config.app.name, env!("CARGO_PKG_VERSION"));
    info!(
        "Environment: {} (config from {})",
        config_loader.environment(),
        config_loader.config_dir()
    );
    info!("Database: {}", config.database.url);

    AppBuilder::new().with_config(config).run().await
}
