//! Domain models for the farm records application
//!
//! Re-exports the entity model from the shared crate

pub use shared::models::*;
pub use shared::types::EntityId;
