//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use directory_core::{DirectoryError, ErrorResponse};
use serde::Serialize;
use tracing::{debug, error};

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub DirectoryError);

impl From<DirectoryError> for AppError {
    fn from(err: DirectoryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), error = %self.0, "Request failed");
        } else {
            debug!(code = self.0.error_code(), error = %self.0, "Request rejected");
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::FieldError;

    #[test]
    fn test_status_follows_error() {
        let response = AppError(DirectoryError::not_found("Contact", 9)).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response =
            AppError(DirectoryError::UnsupportedMediaType("text/plain".into())).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let response = AppError(DirectoryError::ValidationFailed(vec![FieldError {
            field: "name".into(),
            message: "Name is required".into(),
            code: "required".into(),
        }]))
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_created_sets_status() {
        let (status, Json(body)) = created("x");
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, "x");
    }
}
