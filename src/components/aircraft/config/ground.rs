use serde::{Deserialize, Serialize};

/// Wheel contact and take-off roll constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundConfig {
    /// Height of the reference point above the wheels' contact patch (m).
    pub wheel_height: f64,
    /// Rolling resistance coefficient μr.
    pub rolling_resistance: f64,
    /// Braking friction coefficient.
    pub ground_friction: f64,
    /// Brake efficiency [0-1].
    pub brake_efficiency: f64,
    /// Throttle (%) below which the brakes engage progressively.
    pub brake_throttle: f64,
    /// Nosewheel steering authority (deg/s² per unit input).
    pub taxi_yaw_rate: f64,
    /// Fraction of roll input redirected to nosewheel steering.
    pub roll_to_steer: f64,
    /// Rotation speed V_R below which the elevator has no authority (m/s).
    pub rotation_speed: f64,
    /// Maximum pitch acceleration available during rotation (deg/s²).
    pub takeoff_pitch_rate: f64,
    /// Angle of attack above which a rotating aircraft bleeds speed (degrees).
    pub max_takeoff_aoa: f64,
    /// Rate at which roll is levelled while on the wheels (1/s).
    pub roll_leveling: f64,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            wheel_height: 1.5,
            rolling_resistance: 0.08,
            ground_friction: 0.4,
            brake_efficiency: 0.7,
            brake_throttle: 20.0,
            taxi_yaw_rate: 25.0,
            roll_to_steer: 0.7,
            rotation_speed: 15.0,
            takeoff_pitch_rate: 8.0,
            max_takeoff_aoa: 12.0,
            roll_leveling: 2.0,
        }
    }
}

/// Touchdown limits. Exceeding any of them on the airborne→grounded transition is a crash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingLimits {
    /// Gear progress counted as "down and locked".
    pub min_gear_progress: f64,
    /// Safe sink rate; anything more negative is a crash (m/s).
    pub max_vertical_speed: f64,
    /// Stricter threshold separating a hard landing from a hard impact (m/s).
    pub hard_impact_vertical_speed: f64,
    /// Bank limit at touchdown (degrees).
    pub max_roll: f64,
    /// Nose-down pitch that collapses the nose gear (degrees, negative).
    pub nose_gear_max_pitch: f64,
    /// Nose-up pitch that strikes the tail below rotation speed (degrees).
    pub tail_strike_pitch: f64,
    /// Fraction of climb rate retained after a good touchdown.
    pub touchdown_damping: f64,
    /// Fraction of flight path angle retained after a good touchdown.
    pub touchdown_gamma_damping: f64,
    /// Height above terrain below which a collision warning is raised (m).
    pub collision_warning_margin: f64,
}

impl Default for LandingLimits {
    fn default() -> Self {
        Self {
            min_gear_progress: 0.9,
            max_vertical_speed: -3.0,
            hard_impact_vertical_speed: -5.0,
            max_roll: 5.0,
            nose_gear_max_pitch: -8.0,
            tail_strike_pitch: 20.0,
            touchdown_damping: 0.85,
            touchdown_gamma_damping: 0.5,
            collision_warning_margin: 20.0,
        }
    }
}
