//! Health endpoint.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

/// Body of `GET /health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy`, or `unhealthy` when the store does not answer.
    pub status: String,
    /// Crate version of the running server.
    pub version: String,
    /// `up`, `down`, or `not_configured`.
    pub database: String,
}

/// Creates the health router, mounted at the root.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Reports process and store health.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Store is unreachable", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = match &state.database {
        None => "not_configured",
        Some(pool) => match pool.health_check().await {
            Ok(()) => "up",
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                "down"
            }
        },
    };

    let (status, label) = if database == "down" {
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    } else {
        (StatusCode::OK, "healthy")
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
        }),
    )
}
