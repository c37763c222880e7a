mod engine;

pub use engine::{drain_battery, propeller_efficiency, spool_thrust, target_thrust, update_throttle};
