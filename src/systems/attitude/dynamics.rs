use rand::Rng;

use crate::components::{Attitude, BodyRates, ControlAuthority, ControlInput, FlightEnvelope, StallState};
use crate::utils::{deg_to_rad, GIMBAL_GUARD_PITCH};

/// Angular accelerations for one tick (deg/s²).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RateDerivatives {
    pub p_dot: f64,
    pub q_dot: f64,
    pub r_dot: f64,
}

/// Control-surface effectiveness: dynamic pressure over cruise dynamic pressure,
/// clamped to the configured band.
///
/// # Arguments
/// * `dynamic_pressure` - Current ½ρV² (Pa).
/// * `sea_level_density` - Density used for the cruise reference (kg/m³).
pub fn control_effectiveness(
    dynamic_pressure: f64,
    controls: &ControlAuthority,
    sea_level_density: f64,
) -> f64 {
    let cruise_q = 0.5 * sea_level_density * controls.cruise_speed * controls.cruise_speed;
    (dynamic_pressure / cruise_q).clamp(controls.min_effectiveness, controls.max_effectiveness)
}

/// Per-axis `authority·input·effectiveness − damping·rate` in flight.
pub fn airborne_rate_derivatives(
    input: &ControlInput,
    rates: &BodyRates,
    controls: &ControlAuthority,
    effectiveness: f64,
) -> RateDerivatives {
    RateDerivatives {
        p_dot: controls.aileron * input.roll * effectiveness - controls.roll_damping * rates.p,
        q_dot: controls.elevator * input.pitch * effectiveness - controls.pitch_damping * rates.q,
        r_dot: controls.rudder * input.yaw * effectiveness - controls.yaw_damping * rates.r,
    }
}

/// `rate += accel·dt`, then clamp every axis to `±max_rate`.
pub fn integrate_rates(rates: &mut BodyRates, derivatives: &RateDerivatives, max_rate: f64, dt: f64) {
    rates.p += derivatives.p_dot * dt;
    rates.q += derivatives.q_dot * dt;
    rates.r += derivatives.r_dot * dt;
    clamp_rates(rates, max_rate);
}

pub fn clamp_rates(rates: &mut BodyRates, max_rate: f64) {
    rates.p = rates.p.clamp(-max_rate, max_rate);
    rates.q = rates.q.clamp(-max_rate, max_rate);
    rates.r = rates.r.clamp(-max_rate, max_rate);
}

/// Random roll and pitch kicks while deep in a stall.
///
/// # Returns
/// `true` when buffeting was applied.
pub fn apply_buffet<R: Rng + ?Sized>(
    rates: &mut BodyRates,
    stall: &StallState,
    controls: &ControlAuthority,
    rng: &mut R,
    dt: f64,
) -> bool {
    if !stall.is_stalling || stall.intensity <= controls.buffet_threshold {
        return false;
    }
    let amplitude = stall.intensity * controls.buffet_amplitude;
    rates.p += (rng.gen::<f64>() - 0.5) * amplitude * dt;
    rates.q += (rng.gen::<f64>() - 0.5) * amplitude * dt;
    true
}

/// Hands-off restoring moments: roll toward wings level and pitch toward
/// `flight_path_angle + trim_aoa`. Each axis only acts while its input is
/// inside the stability threshold.
pub fn apply_auto_stability(
    rates: &mut BodyRates,
    attitude: &Attitude,
    input: &ControlInput,
    flight_path_angle: f64,
    trim_aoa: f64,
    controls: &ControlAuthority,
    dt: f64,
) {
    if input.roll.abs() < controls.stability_input_threshold {
        rates.p -= attitude.roll * controls.roll_stability * dt;
    }
    if input.pitch.abs() < controls.stability_input_threshold {
        let trim_pitch = flight_path_angle + trim_aoa;
        rates.q -= (attitude.pitch - trim_pitch) * controls.pitch_stability * dt;
    }
}

/// Body rates to Euler angle rates.
///
/// Below the gimbal guard the full transform is used:
/// `φ̇ = p + (q·sinφ + r·cosφ)·tanθ`, `θ̇ = q·cosφ − r·sinφ`.
/// At or above it the transform degrades to `φ̇ = p`, `θ̇ = q` so `tanθ` never
/// approaches its singularity. Crash and landing checks rely on this exact
/// behaviour near high pitch.
pub fn integrate_euler(attitude: &mut Attitude, rates: &BodyRates, dt: f64) {
    if attitude.pitch.abs() < GIMBAL_GUARD_PITCH {
        let phi = deg_to_rad(attitude.roll);
        let theta = deg_to_rad(attitude.pitch);
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_theta = theta.tan();
        attitude.roll += (rates.p + (rates.q * sin_phi + rates.r * cos_phi) * tan_theta) * dt;
        attitude.pitch += (rates.q * cos_phi - rates.r * sin_phi) * dt;
    } else {
        attitude.roll += rates.p * dt;
        attitude.pitch += rates.q * dt;
    }
}

/// Clamp pitch and roll to the structural limits.
pub fn clamp_attitude(attitude: &mut Attitude, limits: &FlightEnvelope) {
    attitude.pitch = attitude.pitch.clamp(-limits.max_pitch, limits.max_pitch);
    attitude.roll = attitude.roll.clamp(-limits.max_roll, limits.max_roll);
}
