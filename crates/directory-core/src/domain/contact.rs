//! Contact value objects.

use crate::ContactId;
use serde::{Deserialize, Serialize};

/// A stored contact record.
///
/// Contacts are plain values: the store hands out copies and the service
/// passes them around by value. All four attributes are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned identifier; immutable after creation.
    pub id: ContactId,

    /// Display name.
    pub name: String,

    /// Email address, unique across all contacts.
    pub email: String,

    /// Phone number, 10 or 11 digits.
    pub phone: String,

    /// Two-digit area code (DDD), kept as text to preserve leading zeros.
    pub area_code: String,
}

impl Contact {
    /// Builds a stored contact from the fields of a new one.
    #[must_use]
    pub fn from_new(id: ContactId, contact: NewContact) -> Self {
        Self {
            id,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            area_code: contact.area_code,
        }
    }

    /// Replaces every attribute except the identity.
    pub fn replace(&mut self, contact: NewContact) {
        self.name = contact.name;
        self.email = contact.email;
        self.phone = contact.phone;
        self.area_code = contact.area_code;
    }
}

/// The attributes of a contact that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub area_code: String,
}

impl NewContact {
    /// Creates a new contact from its attributes.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        area_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            area_code: area_code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewContact {
        NewContact::new("Maria Silva", "maria@example.com", "11987654321", "11")
    }

    #[test]
    fn test_from_new_keeps_every_field() {
        let contact = Contact::from_new(ContactId(1), sample());
        assert_eq!(contact.id, ContactId(1));
        assert_eq!(contact.name, "Maria Silva");
        assert_eq!(contact.email, "maria@example.com");
        assert_eq!(contact.phone, "11987654321");
        assert_eq!(contact.area_code, "11");
    }

    #[test]
    fn test_replace_keeps_identity() {
        let mut contact = Contact::from_new(ContactId(9), sample());
        contact.replace(NewContact::new("Joao", "joao@example.com", "12345678901", "21"));

        assert_eq!(contact.id, ContactId(9));
        assert_eq!(contact.name, "Joao");
        assert_eq!(contact.area_code, "21");
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let contact = Contact::from_new(ContactId(3), sample());
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["areaCode"], "11");
        assert_eq!(json["id"], 3);
        assert!(json.get("area_code").is_none());
    }
}
