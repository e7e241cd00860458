//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `contact_service.rs`).

pub mod contact_service_impl;

pub use contact_service_impl::ContactServiceImpl;
