//! Typed ID wrappers for domain entities.

use crate::DirectoryError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A strongly-typed wrapper for contact IDs.
///
/// IDs are assigned by the store on creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct ContactId(pub i64);

impl ContactId {
    /// Creates a contact ID from its raw value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parses a contact ID from a path segment.
    ///
    /// Anything that is not a base-10 integer is a `MalformedIdentifier`.
    pub fn parse(s: &str) -> Result<Self, DirectoryError> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DirectoryError::MalformedIdentifier(s.to_string()))
    }

    /// Returns the inner value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for ContactId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ContactId> for i64 {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_parsing() {
        assert_eq!(ContactId::parse("42").unwrap(), ContactId(42));
        assert_eq!(" 7 ".parse::<ContactId>().unwrap(), ContactId(7));
    }

    #[test]
    fn test_contact_id_rejects_non_numeric() {
        for raw in ["abc", "1a", "", "1.5"] {
            match ContactId::parse(raw) {
                Err(DirectoryError::MalformedIdentifier(value)) => assert_eq!(value, raw),
                other => panic!("expected MalformedIdentifier for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_contact_id_serializes_as_number() {
        let json = serde_json::to_string(&ContactId(5)).unwrap();
        assert_eq!(json, "5");
        assert_eq!(ContactId(5).to_string(), "5");
    }
}
