//! Domain service functions

pub mod elapsed;
pub mod layout;
pub mod plate;
pub mod stats;
