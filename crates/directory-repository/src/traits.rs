//! Repository traits for data access abstraction.

use async_trait::async_trait;
use directory_core::{Contact, ContactId, DirectoryResult, NewContact};

/// Contact store port.
///
/// Implementations must enforce email uniqueness themselves and report a
/// violation as `DuplicateEmail`; connectivity failures surface as
/// `StoreUnavailable`.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Inserts a new contact and returns it with its store-assigned id.
    async fn insert(&self, contact: &NewContact) -> DirectoryResult<Contact>;

    /// Finds a contact by ID.
    async fn find_by_id(&self, id: ContactId) -> DirectoryResult<Option<Contact>>;

    /// Returns every contact, ordered by id.
    async fn find_all(&self) -> DirectoryResult<Vec<Contact>>;

    /// Returns the contacts with the given area code, ordered by id.
    async fn find_by_area_code(&self, area_code: &str) -> DirectoryResult<Vec<Contact>>;

    /// Checks if a contact with the given email exists (case-insensitive).
    async fn exists_by_email(&self, email: &str) -> DirectoryResult<bool>;

    /// Replaces every attribute of an existing contact.
    ///
    /// Returns `false` if no contact has the id.
    async fn update(&self, contact: &Contact) -> DirectoryResult<bool>;

    /// Deletes a contact by ID.
    ///
    /// Returns `false` if no contact has the id.
    async fn delete(&self, id: ContactId) -> DirectoryResult<bool>;

    /// Counts all contacts.
    async fn count(&self) -> DirectoryResult<u64>;
}
