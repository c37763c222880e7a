pub mod aerodynamics;
pub mod attitude;
pub mod chute;
pub mod controls;
pub mod gear;
pub mod ground;
pub mod propulsion;

pub use aerodynamics::{calculate_aero_forces, AeroForces, AirDataCalculation};
pub use chute::{request_drag_chute, toggle_drag_chute, update_drag_chute};
pub use controls::shape_input;
pub use gear::{advance_landing_gear, toggle_landing_gear};
