pub mod dynamics;
pub mod turn;

pub use dynamics::{
    airborne_rate_derivatives, apply_auto_stability, apply_buffet, clamp_attitude, clamp_rates,
    control_effectiveness, integrate_euler, integrate_rates, RateDerivatives,
};
pub use turn::{advance_heading, bank_turn_rate};
