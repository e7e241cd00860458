//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner(name: &str, version: &str) {
    info!("{} v{}", name, version);
}

/// Prints where the server can be reached.
pub fn print_startup_info(rest_addr: &str) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}/api/contacts", rest_addr);
    info!("Health:    http://{}/health", rest_addr);
    info!("API Docs:  http://{}/api-docs/openapi.json", rest_addr);
    info!("{}", separator);
}
