//! SQLite implementations of the store ports.

mod contact_repository;

pub use contact_repository::SqliteContactRepository;
