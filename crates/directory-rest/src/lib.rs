//! REST API layer for the contact directory.
//!
//! Exposes the contact service over HTTP/JSON:
//!
//! - `POST   /api/contacts`       create a contact
//! - `GET    /api/contacts`       list contacts, optionally by `areaCode` (or `ddd`)
//! - `GET    /api/contacts/:id`   fetch one contact
//! - `PUT    /api/contacts/:id`   replace a contact
//! - `DELETE /api/contacts/:id`   delete a contact
//! - `GET    /health`             liveness
//! - `GET    /api-docs/openapi.json`

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
