mod air_data;
mod force_calculator;

pub use air_data::{true_airspeed, AirDataCalculation};
pub use force_calculator::{
    calculate_aero_forces, chute_drag_coefficient, chute_drag_force, ground_effect_factor,
    lift_coefficient, AeroForces,
};
