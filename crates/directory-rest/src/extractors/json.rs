//! JSON body extractor with structured rejections.
//!
//! Wraps [`axum::Json`] so that a missing content type, a syntax error, or a
//! body of the wrong shape is answered with an [`ErrorResponse`] body instead
//! of axum's plain-text rejection.
//!
//! [`ErrorResponse`]: directory_core::ErrorResponse

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use directory_core::DirectoryError;
use serde::de::DeserializeOwned;

/// JSON extractor that reports decoding failures as [`DirectoryError`]s.
///
/// A missing or non-JSON `Content-Type` is `UnsupportedMediaType` (415).
/// Every other rejection is `InvalidBody` (400).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

impl<T> std::ops::Deref for JsonBody<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        Ok(Self(value))
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    let error = match rejection {
        JsonRejection::MissingJsonContentType(inner) => {
            DirectoryError::UnsupportedMediaType(inner.body_text())
        }
        other => DirectoryError::InvalidBody(other.body_text()),
    };
    AppError(error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    fn request(content_type: Option<&str>, body: &'static str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body)).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let JsonBody(payload) =
            JsonBody::<Payload>::from_request(request(Some("application/json"), r#"{"name":"Ana"}"#), &())
                .await
                .unwrap();
        assert_eq!(payload.name, "Ana");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_unsupported_media_type() {
        let err = JsonBody::<Payload>::from_request(request(None, r#"{"name":"Ana"}"#), &())
            .await
            .unwrap_err();
        assert!(matches!(err.0, DirectoryError::UnsupportedMediaType(_)));
    }

    #[tokio::test]
    async fn test_malformed_json_is_invalid_body() {
        let err = JsonBody::<Payload>::from_request(request(Some("application/json"), "{oops"), &())
            .await
            .unwrap_err();
        assert!(matches!(err.0, DirectoryError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_invalid_body() {
        let err = JsonBody::<Payload>::from_request(request(Some("application/json"), "[1, 2]"), &())
            .await
            .unwrap_err();
        assert!(matches!(err.0, DirectoryError::InvalidBody(_)));
    }
}
