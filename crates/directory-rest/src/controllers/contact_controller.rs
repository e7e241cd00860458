//! Contact controller.

use crate::{
    extractors::{ContactListQuery, JsonBody, QueryParams},
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use directory_core::{Contact, ContactId, ErrorResponse};
use directory_service::{ContactRequest, MessageResponse};
use tracing::info;

/// Creates the contact router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contacts).post(create_contact))
        .route(
            "/:id",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
}

/// Create a contact.
#[utoipa::path(
    post,
    path = "/api/contacts",
    tag = "contacts",
    request_body = ContactRequest,
    responses(
        (status = 201, description = "Contact created", body = Contact),
        (status = 400, description = "Validation failed or email already registered", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse)
    )
)]
pub async fn create_contact(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ContactRequest>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    let contact = state.contact_service.create_contact(request).await?;
    info!(contact_id = %contact.id, "Contact created");
    Ok(created(contact))
}

/// List contacts, optionally filtered by area code.
#[utoipa::path(
    get,
    path = "/api/contacts",
    tag = "contacts",
    params(
        ("areaCode" = Option<String>, Query, description = "Two-digit area code; `ddd` is accepted too")
    ),
    responses(
        (status = 200, description = "Matching contacts", body = Vec<Contact>),
        (status = 400, description = "Malformed query string", body = ErrorResponse),
        (status = 404, description = "No contact matches", body = ErrorResponse)
    )
)]
pub async fn list_contacts(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ContactListQuery>,
) -> ApiResult<Vec<Contact>> {
    let contacts = state
        .contact_service
        .list_contacts(query.area_code())
        .await?;
    ok(contacts)
}

/// Get a contact by ID.
#[utoipa::path(
    get,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact found", body = Contact),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Contact> {
    let id = ContactId::parse(&id)?;
    let contact = state.contact_service.get_contact(id).await?;
    ok(contact)
}

/// Replace a contact.
#[utoipa::path(
    put,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact ID")),
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Contact updated", body = MessageResponse),
        (status = 400, description = "Malformed id, id mismatch, or validation failed", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse)
    )
)]
pub async fn update_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(request): JsonBody<ContactRequest>,
) -> ApiResult<MessageResponse> {
    let id = ContactId::parse(&id)?;
    state.contact_service.update_contact(id, request).await?;
    info!(contact_id = %id, "Contact updated");
    ok(MessageResponse::new(format!("Contact {id} updated")))
}

/// Delete a contact.
#[utoipa::path(
    delete,
    path = "/api/contacts/{id}",
    tag = "contacts",
    params(("id" = i64, Path, description = "Contact ID")),
    responses(
        (status = 200, description = "Contact deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Contact not found", body = ErrorResponse)
    )
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<MessageResponse> {
    let id = ContactId::parse(&id)?;
    state.contact_service.delete_contact(id).await?;
    info!(contact_id = %id, "Contact deleted");
    ok(MessageResponse::new(format!("Contact {id} deleted")))
}
