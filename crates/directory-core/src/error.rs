//! Unified error types for all layers of the directory.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the contact directory.
///
/// Every variant is recoverable at the request boundary, where it is
/// translated into a status code and an [`ErrorResponse`] body.
#[derive(Error, Debug)]
pub enum DirectoryError {
    // ============ Domain Errors ============
    /// One or more field-level violations, reported together.
    #[error("Validation failed: {}", join_messages(.0))]
    ValidationFailed(Vec<FieldError>),

    /// The email address is already used by another contact.
    #[error("Email '{0}' is already registered")]
    DuplicateEmail(String),

    /// The id, or the list filter, matched nothing.
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// The identifier in the path disagrees with the one in the body.
    #[error("Identity mismatch: path id {path_id} does not match body id {}", describe_id(.body_id))]
    IdentityMismatch { path_id: i64, body_id: Option<i64> },

    /// The identifier in the path is not a number.
    #[error("Malformed identifier: '{0}' is not a valid numeric id")]
    MalformedIdentifier(String),

    // ============ Ingress Errors ============
    /// The request content type is not JSON.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The request body could not be decoded.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// The query string could not be decoded.
    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    // ============ Infrastructure Errors ============
    /// The backing store could not be reached or failed mid-operation.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The backing store rejected a write on a constraint.
    #[error("Store conflict: {0}")]
    StoreConflict(String),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn describe_id(id: &Option<i64>) -> String {
    id.map_or_else(|| "<missing>".to_string(), |id| id.to_string())
}

impl DirectoryError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::ValidationFailed(_)
            | Self::DuplicateEmail(_)
            | Self::IdentityMismatch { .. }
            | Self::MalformedIdentifier(_)
            | Self::InvalidBody(_)
            | Self::InvalidQuery(_) => 400,
            Self::NotFound { .. } => 404,
            Self::StoreConflict(_) => 409,
            Self::UnsupportedMediaType(_) => 415,
            Self::StoreUnavailable(_) => 503,
            Self::Cache(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ValidationFailed(_) => "VALIDATION_FAILED",
            Self::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::IdentityMismatch { .. } => "IDENTITY_MISMATCH",
            Self::MalformedIdentifier(_) => "MALFORMED_IDENTIFIER",
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
            Self::StoreConflict(_) => "STORE_CONFLICT",
            Self::Cache(_) => "CACHE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a duplicate email error.
    #[must_use]
    pub fn duplicate_email<T: Into<String>>(email: T) -> Self {
        Self::DuplicateEmail(email.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns the field violations of a `ValidationFailed` error.
    #[must_use]
    pub fn violations(&self) -> Option<&[FieldError]> {
        match self {
            Self::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for DirectoryError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    || db_err.is_foreign_key_violation()
                    || db_err.is_check_violation() =>
            {
                Self::StoreConflict(db_err.message().to_string())
            }
            _ => Self::StoreUnavailable(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Cache(format!("JSON serialization error: {err}"))
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Ordered field-level errors for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name, as it appears on the wire
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `DirectoryError`.
    ///
    /// Validation failures carry their violations in `details`.
    #[must_use]
    pub fn from_error(error: &DirectoryError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            details: error.violations().map(<[FieldError]>::to_vec),
        }
    }
}

impl From<&DirectoryError> for ErrorResponse {
    fn from(error: &DirectoryError) -> Self {
        Self::from_error(error)
    }
}
