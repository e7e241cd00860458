//! Data Transfer Objects (DTOs).

mod contact_dto;

pub use contact_dto::*;
