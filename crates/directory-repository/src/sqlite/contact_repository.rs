//! SQLite contact repository implementation.

use crate::{traits::ContactRepository, DatabasePoolInterface};
use async_trait::async_trait;
use directory_core::{Contact, ContactId, DirectoryError, DirectoryResult, NewContact};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::{debug, warn};

/// SQLite contact repository implementation.
#[derive(Clone)]
pub struct SqliteContactRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl SqliteContactRepository {
    /// Creates a new SQLite contact repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a contact.
#[derive(Debug, FromRow)]
struct ContactRow {
    id: i64,
    name: String,
    email: String,
    phone: String,
    area_code: String,
}

impl From<ContactRow> for Contact {
    fn from(row: ContactRow) -> Self {
        Self {
            id: ContactId(row.id),
            name: row.name,
            email: row.email,
            phone: row.phone,
            area_code: row.area_code,
        }
    }
}

/// Maps a write error, turning a violation of the email index into `DuplicateEmail`.
fn map_write_error(err: sqlx::Error, email: &str) -> DirectoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.message().contains("email") {
            warn!("Unique email constraint rejected write for: {}", email);
            return DirectoryError::duplicate_email(email);
        }
    }
    DirectoryError::from(err)
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    async fn insert(&self, contact: &NewContact) -> DirectoryResult<Contact> {
        debug!("Inserting contact: {}", contact.email);

        let result = sqlx::query(
            r"
            INSERT INTO contacts (name, email, phone, area_code)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.area_code)
        .execute(self.pool.inner())
        .await
        .map_err(|e| map_write_error(e, &contact.email))?;

        let id = ContactId(result.last_insert_rowid());
        Ok(Contact::from_new(id, contact.clone()))
    }

    async fn find_by_id(&self, id: ContactId) -> DirectoryResult<Option<Contact>> {
        debug!("Finding contact by id: {}", id);

        let row = sqlx::query_as::<_, ContactRow>(
            r"
            SELECT id, name, email, phone, area_code
            FROM contacts
            WHERE id = ?
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Contact::from))
    }

    async fn find_all(&self) -> DirectoryResult<Vec<Contact>> {
        debug!("Finding all contacts");

        let rows = sqlx::query_as::<_, ContactRow>(
            r"
            SELECT id, name, email, phone, area_code
            FROM contacts
            ORDER BY id
            ",
        )
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn find_by_area_code(&self, area_code: &str) -> DirectoryResult<Vec<Contact>> {
        debug!("Finding contacts by area code: {}", area_code);

        let rows = sqlx::query_as::<_, ContactRow>(
            r"
            SELECT id, name, email, phone, area_code
            FROM contacts
            WHERE area_code = ?
            ORDER BY id
            ",
        )
        .bind(area_code)
        .fetch_all(self.pool.inner())
        .await?;

        Ok(rows.into_iter().map(Contact::from).collect())
    }

    async fn exists_by_email(&self, email: &str) -> DirectoryResult<bool> {
        // The column is declared COLLATE NOCASE.
        let exists: (i64,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM contacts WHERE email = ?)")
                .bind(email)
                .fetch_one(self.pool.inner())
                .await?;

        Ok(exists.0 != 0)
    }

    async fn update(&self, contact: &Contact) -> DirectoryResult<bool> {
        debug!("Updating contact: {}", contact.id);

        let result = sqlx::query(
            r"
            UPDATE contacts SET
                name = ?, email = ?, phone = ?, area_code = ?
            WHERE id = ?
            ",
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.area_code)
        .bind(contact.id.into_inner())
        .execute(self.pool.inner())
        .await
        .map_err(|e| map_write_error(e, &contact.email))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: ContactId) -> DirectoryResult<bool> {
        debug!("Deleting contact: {}", id);

        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> DirectoryResult<u64> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(u64::try_from(count.0).unwrap_or(0))
    }
}
