//! # Directory Server Library
//!
//! Wiring, logging setup, and startup utilities for the contact directory
//! server.

pub mod app;
pub mod di;
pub mod logging;
pub mod startup;

pub use app::AppBuilder;
pub use di::AppModule;
