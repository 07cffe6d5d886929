//! Farm Records - record keeping for a single small farm
//!
//! Crops, livestock, fields, harvests and inventory are kept in an
//! in-memory [`FarmService`]. The [`console`] module puts a text menu in
//! front of it.

pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use console::Console;
pub use error::{AppError, AppResult};
pub use services::{FarmService, FarmStatistics};
