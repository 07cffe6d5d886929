//! Shared types and models for the farm records application
//!
//! This crate contains the entity model consumed by the record service and
//! by any front-end that renders it.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
