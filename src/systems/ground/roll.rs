use crate::components::{Attitude, BodyRates, ControlAuthority, ControlInput, GroundConfig};
use crate::systems::attitude::RateDerivatives;
use crate::utils::AT_REST_SPEED;

/// Roll damping multiplier with the wheels on the ground.
const GROUND_ROLL_DAMPING_FACTOR: f64 = 3.0;
/// Share of rotation authority left once the take-off AoA limit is exceeded.
const OVER_ROTATION_AUTHORITY: f64 = 0.3;
/// Speed penalty multiplier for over-rotating on the runway.
const OVER_ROTATION_BLEED: f64 = 5.0;

/// Elevator authority available during the take-off roll.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationAuthority {
    /// Pitch acceleration per unit input (deg/s²).
    pub authority: f64,
    /// Airspeed lost to over-rotation (m/s per second).
    pub speed_bleed: f64,
}

/// Elevator authority while grounded.
///
/// None below V_R. Above it the take-off pitch rate ramps in over half of V_R.
/// Pulling past the take-off AoA cuts authority and bleeds speed.
///
/// # Arguments
/// * `alpha_deg` - Current angle of attack (degrees).
/// * `speed_penalty` - Per-G speed penalty coefficient of the airframe.
pub fn rotation_authority(
    airspeed: f64,
    alpha_deg: f64,
    pitch_input: f64,
    ground: &GroundConfig,
    speed_penalty: f64,
) -> RotationAuthority {
    if airspeed < ground.rotation_speed {
        return RotationAuthority::default();
    }
    let ramp = ((airspeed - ground.rotation_speed) / (0.5 * ground.rotation_speed)).min(1.0);
    let mut authority = ground.takeoff_pitch_rate * ramp;
    let mut speed_bleed = 0.0;
    if alpha_deg > ground.max_takeoff_aoa && pitch_input > 0.0 {
        authority *= OVER_ROTATION_AUTHORITY;
        speed_bleed = speed_penalty * OVER_ROTATION_BLEED;
    }
    RotationAuthority {
        authority,
        speed_bleed,
    }
}

/// Angular accelerations on the wheels.
///
/// Roll is heavily damped and levelled, roll input steers the nosewheel
/// together with the rudder.
pub fn grounded_rate_derivatives(
    input: &ControlInput,
    rates: &BodyRates,
    attitude: &Attitude,
    controls: &ControlAuthority,
    ground: &GroundConfig,
    pitch_authority: f64,
    effectiveness: f64,
) -> RateDerivatives {
    let steer = input.yaw + ground.roll_to_steer * input.roll;
    RateDerivatives {
        p_dot: -GROUND_ROLL_DAMPING_FACTOR * controls.roll_damping * rates.p
            - attitude.roll * ground.roll_leveling,
        q_dot: pitch_authority * input.pitch * effectiveness - controls.pitch_damping * rates.q,
        r_dot: ground.taxi_yaw_rate * steer - controls.yaw_damping * rates.r,
    }
}

/// Forces resisting the take-off or landing roll.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RollingForces {
    pub normal_force: f64,
    pub rolling_resistance: f64,
    pub braking: f64,
}

/// Rolling resistance and braking from the wheel load.
///
/// Brakes engage progressively below the brake throttle and only while moving.
pub fn rolling_forces(
    mass: f64,
    lift: f64,
    airspeed: f64,
    throttle: f64,
    ground: &GroundConfig,
    gravity: f64,
) -> RollingForces {
    let normal_force = (mass * gravity - lift).max(0.0);
    let rolling_resistance = ground.rolling_resistance * normal_force;
    let braking = if throttle < ground.brake_throttle && airspeed > AT_REST_SPEED {
        ground.ground_friction * normal_force * ground.brake_efficiency * (1.0 - throttle / ground.brake_throttle)
    } else {
        0.0
    };
    RollingForces {
        normal_force,
        rolling_resistance,
        braking,
    }
}

/// `(T − rolling − braking − D) / m` along the runway.
pub fn ground_longitudinal_accel(thrust: f64, drag: f64, mass: f64, forces: &RollingForces) -> f64 {
    (thrust - forces.rolling_resistance - forces.braking - drag) / mass
}

/// Upward acceleration from lift in excess of weight once past V_R, else 0.
pub fn liftoff_accel(lift: f64, mass: f64, airspeed: f64, ground: &GroundConfig, gravity: f64) -> f64 {
    let weight = mass * gravity;
    if airspeed >= ground.rotation_speed && lift > weight {
        (lift - weight) / mass
    } else {
        0.0
    }
}
