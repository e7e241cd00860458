//! Contact validation.
//!
//! Validation never stops at the first problem: every field is checked and
//! all violations are returned together, in a fixed field order
//! (`name`, `email`, `areaCode`, `phone`). Each field reports at most one
//! violation, the first rule it breaks.

use crate::{DirectoryError, DirectoryResult, FieldError, NewContact};
use std::borrow::Cow;
use validator::ValidationError;

/// Maximum name length, in code points.
pub const NAME_MAX_CHARS: usize = 100;

/// Maximum email length, in code points.
pub const EMAIL_MAX_CHARS: usize = 255;

/// Exact area code length.
pub const AREA_CODE_LEN: usize = 2;

/// Minimum phone length.
pub const PHONE_MIN_LEN: usize = 10;

/// Maximum phone length.
pub const PHONE_MAX_LEN: usize = 11;

/// Validates a contact and returns every violation, in check order.
///
/// An empty result means the record is acceptable for both create and update.
#[must_use]
pub fn validate_contact(contact: &NewContact) -> Vec<FieldError> {
    [
        ("name", check_name(&contact.name)),
        ("email", check_email(&contact.email)),
        ("areaCode", check_area_code(&contact.area_code)),
        ("phone", check_phone(&contact.phone)),
    ]
    .into_iter()
    .filter_map(|(field, result)| result.err().map(|e| to_field_error(field, &e)))
    .collect()
}

/// Extension trait for validating contacts.
pub trait ValidateExt {
    /// Validates the value and returns `ValidationFailed` with all violations.
    fn validate_request(&self) -> DirectoryResult<()>;
}

impl ValidateExt for NewContact {
    fn validate_request(&self) -> DirectoryResult<()> {
        let violations = validate_contact(self);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DirectoryError::ValidationFailed(violations))
        }
    }
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    rules::not_blank(name).map_err(|e| e.with_message(Cow::from("Name is required")))?;
    rules::max_chars(name, NAME_MAX_CHARS).map_err(|e| {
        e.with_message(Cow::from(format!(
            "Name cannot exceed {NAME_MAX_CHARS} characters"
        )))
    })
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    rules::not_blank(email).map_err(|e| e.with_message(Cow::from("Email is required")))?;
    rules::contains_at(email).map_err(|e| e.with_message(Cow::from("Email is invalid")))?;
    rules::max_chars(email, EMAIL_MAX_CHARS).map_err(|e| {
        e.with_message(Cow::from(format!(
            "Email cannot exceed {EMAIL_MAX_CHARS} characters"
        )))
    })
}

fn check_area_code(area_code: &str) -> Result<(), ValidationError> {
    rules::not_blank(area_code)
        .map_err(|e| e.with_message(Cow::from("Area code is required")))?;
    rules::exact_chars(area_code, AREA_CODE_LEN).map_err(|e| {
        e.with_message(Cow::from(format!(
            "Area code must have exactly {AREA_CODE_LEN} digits"
        )))
    })?;
    rules::ascii_digits(area_code)
        .map_err(|e| e.with_message(Cow::from("Area code must be numeric")))
}

fn check_phone(phone: &str) -> Result<(), ValidationError> {
    rules::not_blank(phone).map_err(|e| e.with_message(Cow::from("Phone is required")))?;
    rules::chars_between(phone, PHONE_MIN_LEN, PHONE_MAX_LEN).map_err(|e| {
        e.with_message(Cow::from(format!(
            "Phone must have between {PHONE_MIN_LEN} and {PHONE_MAX_LEN} digits"
        )))
    })?;
    rules::ascii_digits(phone).map_err(|e| e.with_message(Cow::from("Phone must be numeric")))
}

fn to_field_error(field: &str, error: &ValidationError) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: error
            .message
            .as_ref()
            .map_or_else(|| error.code.to_string(), ToString::to_string),
        code: error.code.to_string(),
    }
}

/// Common validation rules.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("required"));
        }
        Ok(())
    }

    /// Validates that a string has at most `max` code points.
    pub fn max_chars(value: &str, max: usize) -> Result<(), ValidationError> {
        if value.chars().count() > max {
            return Err(ValidationError::new("too_long"));
        }
        Ok(())
    }

    /// Validates that a string has exactly `len` code points.
    pub fn exact_chars(value: &str, len: usize) -> Result<(), ValidationError> {
        if value.chars().count() != len {
            return Err(ValidationError::new("invalid_length"));
        }
        Ok(())
    }

    /// Validates that a string has between `min` and `max` code points, inclusive.
    pub fn chars_between(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
        let count = value.chars().count();
        if count < min || count > max {
            return Err(ValidationError::new("invalid_length"));
        }
        Ok(())
    }

    /// Validates that a string contains an `@`.
    pub fn contains_at(value: &str) -> Result<(), ValidationError> {
        if !value.contains('@') {
            return Err(ValidationError::new("invalid_email"));
        }
        Ok(())
    }

    /// Validates that every character is an ASCII digit.
    pub fn ascii_digits(value: &str) -> Result<(), ValidationError> {
        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::new("not_numeric"));
        }
        Ok(())
    }
}
