//! Contact service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface, CachePolicy};
use crate::contact_service::ContactService;
use crate::dto::ContactRequest;
use async_trait::async_trait;
use directory_core::{Contact, ContactId, DirectoryError, DirectoryResult, ValidateExt};
use directory_repository::ContactRepository;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Contact service with a read-through cache in front of the store.
///
/// Reads try the cache first and populate it on a miss. Writes go to the
/// store first and then invalidate: `item:<id>` for the touched contact and
/// the whole list namespace (`all` and `list:*`), because any write can
/// change any list.
pub struct ContactServiceImpl {
    repository: Arc<dyn ContactRepository>,
    cache: Arc<dyn CacheInterface>,
    policy: CachePolicy,
}

impl ContactServiceImpl {
    /// Creates a new contact service with the default cache policy.
    pub fn new(repository: Arc<dyn ContactRepository>, cache: Arc<dyn CacheInterface>) -> Self {
        Self::with_policy(repository, cache, CachePolicy::default())
    }

    /// Creates a new contact service with explicit TTLs.
    pub fn with_policy(
        repository: Arc<dyn ContactRepository>,
        cache: Arc<dyn CacheInterface>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            repository,
            cache,
            policy,
        }
    }

    /// Stores a freshly read value unless an invalidation ran since `generation`.
    ///
    /// Failures are logged and swallowed; the value is still valid.
    async fn populate<T: Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
        generation: u64,
    ) {
        match self.cache.set_if_generation(key, value, ttl, generation).await {
            Ok(true) => {}
            Ok(false) => debug!("Not caching '{}': invalidated during read", key),
            Err(e) => warn!("Failed to cache '{}': {}", key, e),
        }
    }

    async fn invalidate_lists(&self) -> DirectoryResult<()> {
        self.cache.delete(cache_keys::ALL_CONTACTS).await?;
        self.cache.delete_pattern(cache_keys::AREA_CODE_LISTS).await?;
        Ok(())
    }

    async fn invalidate_contact(&self, id: ContactId) -> DirectoryResult<()> {
        self.cache.delete(&cache_keys::contact_by_id(id)).await?;
        self.invalidate_lists().await
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn create_contact(&self, request: ContactRequest) -> DirectoryResult<Contact> {
        debug!("Creating contact: {}", request.email);

        let contact = request.into_new_contact();
        contact.validate_request()?;

        // Fast path; the store's unique index is authoritative.
        if self.repository.exists_by_email(&contact.email).await? {
            return Err(DirectoryError::duplicate_email(contact.email));
        }

        let created = self.repository.insert(&contact).await?;
        self.invalidate_lists().await?;

        info!("Contact created: {}", created.id);
        Ok(created)
    }

    async fn get_contact(&self, id: ContactId) -> DirectoryResult<Contact> {
        debug!("Getting contact: {}", id);

        let cache_key = cache_keys::contact_by_id(id);
        if let Some(cached) = self.cache.get::<Contact>(&cache_key).await? {
            debug!("Contact {} served from cache", id);
            return Ok(cached);
        }

        let generation = self.cache.generation();
        let contact = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found("Contact", id))?;

        self.populate(&cache_key, &contact, self.policy.item_ttl, generation)
            .await;
        Ok(contact)
    }

    async fn list_contacts(&self, area_code: Option<&str>) -> DirectoryResult<Vec<Contact>> {
        let filter = area_code.map(str::trim).filter(|s| !s.is_empty());
        debug!("Listing contacts, area code: {:?}", filter);

        let cache_key = cache_keys::contact_list(filter);
        if let Some(cached) = self.cache.get::<Vec<Contact>>(&cache_key).await? {
            debug!("Contact list '{}' served from cache", cache_key);
            return Ok(cached);
        }

        let generation = self.cache.generation();
        let contacts = match filter {
            Some(area_code) => self.repository.find_by_area_code(area_code).await?,
            None => self.repository.find_all().await?,
        };

        // Empty results are never cached; the next create must be visible.
        if contacts.is_empty() {
            let id = filter.map_or_else(|| "all".to_string(), |ac| format!("areaCode={ac}"));
            return Err(DirectoryError::not_found("Contact", id));
        }

        self.populate(&cache_key, &contacts, self.policy.list_ttl, generation)
            .await;
        Ok(contacts)
    }

    async fn update_contact(&self, id: ContactId, request: ContactRequest) -> DirectoryResult<Contact> {
        debug!("Updating contact: {}", id);

        if request.id != Some(id.into_inner()) {
            return Err(DirectoryError::IdentityMismatch {
                path_id: id.into_inner(),
                body_id: request.id,
            });
        }

        let replacement = request.into_new_contact();
        replacement.validate_request()?;

        let mut contact = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DirectoryError::not_found("Contact", id))?;

        contact.replace(replacement);

        if !self.repository.update(&contact).await? {
            return Err(DirectoryError::not_found("Contact", id));
        }
        self.invalidate_contact(id).await?;

        info!("Contact updated: {}", id);
        Ok(contact)
    }

    async fn delete_contact(&self, id: ContactId) -> DirectoryResult<()> {
        debug!("Deleting contact: {}", id);

        if !self.repository.delete(id).await? {
            return Err(DirectoryError::not_found("Contact", id));
        }
        self.invalidate_contact(id).await?;

        info!("Contact deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for ContactServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactServiceImpl")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
