//! Content-type enforcement.

use crate::responses::AppError;
use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use directory_core::DirectoryError;

const JSON_MEDIA_TYPE: &str = "application/json";

/// Rejects requests that declare a non-JSON `Content-Type` with 415.
///
/// Requests without the header pass through; body extractors decide
/// whether they need one.
pub async fn require_json_content_type(request: Request<Body>, next: Next) -> Response {
    if let Some(value) = request.headers().get(CONTENT_TYPE) {
        let declared = value.to_str().unwrap_or_default();
        if !declared.to_ascii_lowercase().contains(JSON_MEDIA_TYPE) {
            let shown = if declared.is_empty() { "<opaque>" } else { declared };
            return AppError(DirectoryError::UnsupportedMediaType(format!(
                "expected {JSON_MEDIA_TYPE}, got {shown}"
            )))
            .into_response();
        }
    }

    next.run(request).await
}
