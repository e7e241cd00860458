//! HTTP middleware.

mod content_type;
mod logging;

pub use content_type::require_json_content_type;
pub use logging::logging_middleware;
