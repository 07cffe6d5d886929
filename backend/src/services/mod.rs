//! Business logic services for the farm records application

pub mod farm;
pub mod statistics;

pub use farm::FarmService;
pub use statistics::FarmStatistics;
