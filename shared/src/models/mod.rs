//! Domain models for the farm record store

mod crop;
mod farm;
mod field;
mod harvest;
mod inventory;
mod livestock;

pub use crop::*;
pub use farm::*;
pub use field::*;
pub use harvest::*;
pub use inventory::*;
pub use livestock::*;
