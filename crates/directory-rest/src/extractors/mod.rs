//! Custom Axum extractors.

mod json;
mod query;

pub use json::JsonBody;
pub use query::{ContactListQuery, QueryParams};
