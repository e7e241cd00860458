//! # Directory Core
//!
//! Core types, validation rules, and error definitions for the contact
//! directory. Every other crate in the workspace builds on the value objects
//! and the error taxonomy defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;
