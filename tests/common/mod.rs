#![allow(dead_code)]

mod assertions;
mod fixtures;
mod helpers;

// Re-export
pub use assertions::{assert_flight_data_valid, assert_heading_change, assert_progress_step};

pub use fixtures::*;
pub use helpers::*;
