//! OpenAPI documentation for the REST API.

use crate::controllers::HealthResponse;
use directory_core::{Contact, ContactId, ErrorResponse, FieldError};
use directory_service::{ContactRequest, MessageResponse};
use utoipa::OpenApi;

/// OpenAPI document served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact Directory API",
        version = "1.0.0",
        description = "Contact directory with read-through caching",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::contact_controller::create_contact,
        crate::controllers::contact_controller::list_contacts,
        crate::controllers::contact_controller::get_contact,
        crate::controllers::contact_controller::update_contact,
        crate::controllers::contact_controller::delete_contact,
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            ContactId,
            Contact,
            ContactRequest,
            MessageResponse,
            ErrorResponse,
            FieldError,
            HealthResponse,
        )
    ),
    tags(
        (name = "contacts", description = "Contact management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
