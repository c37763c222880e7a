use serde::{Deserialize, Serialize};

/// Configuration for the engine and propeller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerplantConfig {
    /// Name of the powerplant
    pub name: String,
    /// Maximum static thrust (N)
    pub max_thrust: f64,
    /// Thrust at idle (N)
    pub idle_thrust: f64,
    /// First-order spool rate toward the target thrust (1/s)
    pub thrust_lag: f64,
    /// Airspeed at which propeller efficiency would reach zero (m/s)
    pub prop_speed_limit: f64,
    /// Lowest propeller efficiency at high airspeed [0-1]
    pub min_prop_efficiency: f64,
    /// Throttle lever travel per unit of throttle command (%/s)
    pub throttle_rate: f64,
    /// Battery/fuel drain at full throttle (%/s)
    pub throttle_drain: f64,
}

impl Default for PowerplantConfig {
    fn default() -> Self {
        Self::predator()
    }
}

impl PowerplantConfig {
    pub fn predator() -> Self {
        Self {
            name: "Rotax 914".to_string(),
            max_thrust: 1100.0,
            idle_thrust: 30.0,
            thrust_lag: 2.5,
            prop_speed_limit: 120.0,
            min_prop_efficiency: 0.15,
            throttle_rate: 28.0,
            throttle_drain: 0.05,
        }
    }
}
