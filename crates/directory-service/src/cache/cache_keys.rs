//! Cache key generators for consistent key naming.
//!
//! The key space has three shapes: `all` for the unfiltered list,
//! `list:<areaCode>` for filtered lists and `item:<id>` for single contacts.

use directory_core::ContactId;

/// Key of the unfiltered contact list.
pub const ALL_CONTACTS: &str = "all";

/// Pattern matching every area-code list key.
pub const AREA_CODE_LISTS: &str = "list:*";

/// Generate a cache key for a contact by ID.
#[must_use]
pub fn contact_by_id(id: ContactId) -> String {
    format!("item:{id}")
}

/// Generate a cache key for a contact list.
///
/// `None` selects the unfiltered list.
#[must_use]
pub fn contact_list(area_code: Option<&str>) -> String {
    match area_code {
        Some(area_code) => format!("list:{area_code}"),
        None => ALL_CONTACTS.to_string(),
    }
}
