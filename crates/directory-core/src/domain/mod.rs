//! # Directory Domain
//!
//! Domain value objects for the contact directory.

pub mod contact;

pub use contact::*;
