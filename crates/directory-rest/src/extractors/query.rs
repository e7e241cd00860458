//! Query string extraction.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use directory_core::DirectoryError;
use serde::{de::DeserializeOwned, Deserialize};

/// Query string of `GET /api/contacts`.
///
/// Accepts the area code as `areaCode` or, for older clients, `ddd`.
/// Giving both is rejected as a duplicate field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListQuery {
    #[serde(default, rename = "areaCode", alias = "ddd")]
    pub area_code: Option<String>,
}

impl ContactListQuery {
    /// Returns the filter, if any was given.
    pub fn area_code(&self) -> Option<&str> {
        self.area_code.as_deref()
    }
}

/// Query extractor that reports decoding failures as `InvalidQuery` (400)
/// with an [`ErrorResponse`](directory_core::ErrorResponse) body.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError(DirectoryError::InvalidQuery(rejection.body_text())))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(uri: &str) -> Result<ContactListQuery, AppError> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        QueryParams::<ContactListQuery>::from_request_parts(&mut parts, &())
            .await
            .map(|QueryParams(query)| query)
    }

    #[tokio::test]
    async fn test_area_code_and_legacy_name() {
        let query = extract("/api/contacts?areaCode=11").await.unwrap();
        assert_eq!(query.area_code(), Some("11"));

        let query = extract("/api/contacts?ddd=21").await.unwrap();
        assert_eq!(query.area_code(), Some("21"));
    }

    #[tokio::test]
    async fn test_no_filter() {
        let query = extract("/api/contacts").await.unwrap();
        assert_eq!(query.area_code(), None);
    }

    #[tokio::test]
    async fn test_both_names_is_invalid_query() {
        let err = extract("/api/contacts?areaCode=11&ddd=21").await.unwrap_err();
        assert!(matches!(err.0, DirectoryError::InvalidQuery(_)));
    }
}
