//! Contact service trait definition.

use crate::dto::ContactRequest;
use async_trait::async_trait;
use directory_core::{Contact, ContactId, DirectoryResult};

/// Contact service trait.
///
/// Writes return only after the store has accepted them and the affected
/// cache keys are invalidated, so any later read observes the write.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validates and stores a new contact. Any id in the request is ignored.
    async fn create_contact(&self, request: ContactRequest) -> DirectoryResult<Contact>;

    /// Gets a contact by ID.
    async fn get_contact(&self, id: ContactId) -> DirectoryResult<Contact>;

    /// Lists contacts, optionally filtered by area code.
    ///
    /// A blank filter means no filter. An empty result is `NotFound`.
    async fn list_contacts(&self, area_code: Option<&str>) -> DirectoryResult<Vec<Contact>>;

    /// Replaces every attribute of a contact. The request id must equal `id`.
    async fn update_contact(&self, id: ContactId, request: ContactRequest) -> DirectoryResult<Contact>;

    /// Deletes a contact.
    async fn delete_contact(&self, id: ContactId) -> DirectoryResult<()>;
}
