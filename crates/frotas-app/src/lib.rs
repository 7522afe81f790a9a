//! Application service layer - config, export, filtering, store access

pub mod config;
pub mod export;
pub mod filter;
pub mod repository;

pub use config::Config;
pub use export::{default_report_name, export_report};
pub use filter::FleetFilter;
