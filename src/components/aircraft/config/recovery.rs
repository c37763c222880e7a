use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragChuteConfig {
    /// Fraction of `C_D0` added at full deployment (3.0 = +300 %).
    pub drag_multiplier: f64,
    /// Deployment progress per second; retraction runs at twice this rate.
    pub deploy_speed: f64,
    /// Below this airspeed the canopy collapses and retracts (m/s).
    pub min_speed: f64,
    /// Highest height above terrain at which the chute may open (m).
    pub max_altitude: f64,
    /// Canopy reference area (m²).
    pub area: f64,
    /// Canopy drag coefficient.
    pub drag_coefficient: f64,
}

impl Default for DragChuteConfig {
    fn default() -> Self {
        Self {
            drag_multiplier: 3.0,
            deploy_speed: 0.8,
            min_speed: 2.0,
            max_altitude: 15.0,
            area: 8.0,
            drag_coefficient: 1.2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingGearConfig {
    /// Time for a full extension or retraction (s).
    pub deploy_time: f64,
}

impl Default for LandingGearConfig {
    fn default() -> Self {
        Self { deploy_time: 2.0 }
    }
}
