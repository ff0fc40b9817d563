pub mod config;
pub mod error;
pub mod inventory;
pub mod telemetry;
