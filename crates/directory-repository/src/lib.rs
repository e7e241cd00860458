//! # Directory Repository
//!
//! Data access for contacts:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ContactRepository>      (store port)
//! SqliteContactRepository              (SQLite / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>  (pool port)
//! DatabasePool
//!   ↓
//! SQLite
//! ```
//!
//! The store is authoritative for email uniqueness: the unique index on
//! `contacts.email` backs the service-level existence check.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
