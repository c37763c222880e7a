use crate::utils::{deg_to_rad, rad_to_deg, wrap_heading};

/// Coordinated turn rate from bank angle, `g·tanφ / max(V, Vs)`, in deg/s.
///
/// # Arguments
/// * `roll` - Bank angle (degrees).
/// * `true_airspeed` - Airspeed (m/s), floored at `min_airspeed`.
pub fn bank_turn_rate(roll: f64, true_airspeed: f64, min_airspeed: f64, gravity: f64) -> f64 {
    let speed = true_airspeed.max(min_airspeed);
    rad_to_deg(gravity * deg_to_rad(roll).tan() / speed)
}

/// Advances the heading by bank-induced turn plus yaw rate, wrapped to [0, 360).
///
/// # Arguments
/// * `yaw_rate` - Body yaw rate r (deg/s).
pub fn advance_heading(
    heading: f64,
    roll: f64,
    yaw_rate: f64,
    true_airspeed: f64,
    min_airspeed: f64,
    gravity: f64,
    dt: f64,
) -> f64 {
    let turn_rate = bank_turn_rate(roll, true_airspeed, min_airspeed, gravity);
    wrap_heading(heading + (turn_rate + yaw_rate) * dt)
}
