//! Contact-related DTOs.

use directory_core::NewContact;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Request body for creating or replacing a contact.
///
/// Missing or `null` attributes decode as empty strings so that validation,
/// not the JSON decoder, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    /// Ignored on create; must match the path id on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone: String,
    /// Two-digit area code (DDD).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub area_code: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl ContactRequest {
    /// Returns the contact attributes, dropping the id.
    #[must_use]
    pub fn into_new_contact(self) -> NewContact {
        NewContact {
            name: self.name,
            email: self.email,
            phone: self.phone,
            area_code: self.area_code,
        }
    }
}

impl From<NewContact> for ContactRequest {
    fn from(contact: NewContact) -> Self {
        Self {
            id: None,
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            area_code: contact.area_code,
        }
    }
}

/// Confirmation returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates a confirmation message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let request: ContactRequest = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(request.name, "Ana");
        assert!(request.email.is_empty());
        assert!(request.id.is_none());
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let request: ContactRequest = serde_json::from_str(
            r#"{"id": null, "name": null, "email": "bad", "phone": null, "areaCode": null}"#,
        )
        .unwrap();
        assert!(request.id.is_none());
        assert!(request.name.is_empty());
        assert_eq!(request.email, "bad");
        assert!(request.phone.is_empty());
        assert!(request.area_code.is_empty());
    }

    #[test]
    fn test_wrong_type_is_still_rejected() {
        assert!(serde_json::from_str::<ContactRequest>(r#"{"name": 42}"#).is_err());
    }

    #[test]
    fn test_area_code_uses_camel_case() {
        let request: ContactRequest =
            serde_json::from_str(r#"{"id": 4, "areaCode": "11"}"#).unwrap();
        assert_eq!(request.id, Some(4));
        assert_eq!(request.into_new_contact().area_code, "11");
    }
}
