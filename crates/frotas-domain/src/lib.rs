//! Domain services for the fleet yard dashboard

pub mod service;

pub use service::elapsed::{elapsed_since, format_minutes};
pub use service::layout::{bay_of_ramp, ramps_of_bay};
pub use service::plate::{format_plate, validate_plate};
pub use service::stats::{is_overdue, YardStats};
