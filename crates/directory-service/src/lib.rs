//! # Directory Service
//!
//! Business logic for the contact directory: validation, store access and
//! the read-through cache that sits in front of the store.

pub mod cache;
pub mod contact_service;
pub mod dto;
pub mod r#impl;

pub use cache::*;
pub use contact_service::*;
pub use dto::*;
pub use r#impl::ContactServiceImpl;
