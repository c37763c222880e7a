use serde::{Deserialize, Serialize};

use crate::utils::SEA_LEVEL_DENSITY;

/// Air-relative and flight-path quantities of the aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// Indicated airspeed along the flight path (m/s), never negative.
    pub airspeed: f64,
    /// Airspeed corrected for the heading-projected wind (m/s).
    pub true_airspeed: f64,
    /// Horizontal speed over the ground (m/s).
    pub ground_speed: f64,
    /// Flight-path angle γ (degrees, positive climbing).
    pub flight_path_angle: f64,
    /// Climb rate (m/s).
    pub climb_rate: f64,
    /// Climb rate latched at the start of the tick, used for touchdown checks (m/s).
    pub vertical_speed: f64,
    /// Angle of attack α = θ − γ (degrees).
    pub angle_of_attack: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Dynamic pressure ½ρV² (Pa).
    pub dynamic_pressure: f64,
}

impl AirData {
    /// Air data for steady flight at `airspeed` with no wind.
    pub fn at_airspeed(airspeed: f64) -> Self {
        Self {
            airspeed,
            true_airspeed: airspeed,
            ground_speed: airspeed,
            ..Default::default()
        }
    }
}

impl Default for AirData {
    /// Provides a default state for zero airspeed at sea level.
    fn default() -> Self {
        Self {
            airspeed: 0.0,
            true_airspeed: 0.0,
            ground_speed: 0.0,
            flight_path_angle: 0.0,
            climb_rate: 0.0,
            vertical_speed: 0.0,
            angle_of_attack: 0.0,
            density: SEA_LEVEL_DENSITY,
            dynamic_pressure: 0.0,
        }
    }
}
