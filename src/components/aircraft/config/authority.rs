use serde::{Deserialize, Serialize};

/// Control-surface authority and the natural rotational behaviour of the airframe.
///
/// All rates are in degrees; authorities are angular accelerations per unit of
/// shaped input (deg/s²), damping and stability terms are per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlAuthority {
    pub elevator: f64,
    pub aileron: f64,
    pub rudder: f64,
    pub pitch_damping: f64,
    pub roll_damping: f64,
    pub yaw_damping: f64,
    /// Restoring rate pulling roll toward wings level.
    pub roll_stability: f64,
    /// Restoring rate pulling pitch toward `flight path angle + trim AoA`.
    pub pitch_stability: f64,
    /// Shaped inputs below this magnitude count as "hands off" for auto-stability.
    pub stability_input_threshold: f64,
    /// Airspeed at which control effectiveness is 1.0 (m/s).
    pub cruise_speed: f64,
    pub min_effectiveness: f64,
    pub max_effectiveness: f64,
    /// Amplitude of stall buffeting per unit stall intensity (deg/s²).
    pub buffet_amplitude: f64,
    /// Stall intensity above which buffeting is injected.
    pub buffet_threshold: f64,
}

impl Default for ControlAuthority {
    fn default() -> Self {
        Self {
            elevator: 50.0,
            aileron: 90.0,
            rudder: 30.0,
            pitch_damping: 4.8,
            roll_damping: 5.5,
            yaw_damping: 4.2,
            roll_stability: 1.4,
            pitch_stability: 0.9,
            stability_input_threshold: 0.05,
            cruise_speed: 35.0,
            min_effectiveness: 0.1,
            max_effectiveness: 1.8,
            buffet_amplitude: 15.0,
            buffet_threshold: 0.2,
        }
    }
}
