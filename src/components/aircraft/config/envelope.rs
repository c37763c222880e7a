use serde::{Deserialize, Serialize};

/// Structural and performance limits of the airframe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightEnvelope {
    /// Structural pitch limit (degrees).
    pub max_pitch: f64,
    /// Structural roll limit (degrees).
    pub max_roll: f64,
    /// Body angular rate limit (deg/s).
    pub max_angular_rate: f64,
    /// Stall speed Vs (m/s).
    pub min_airspeed: f64,
    /// Never-exceed speed VNE (m/s).
    pub max_airspeed: f64,
    /// Lowest permitted altitude AMSL (m).
    pub min_height: f64,
    /// Service ceiling AMSL (m).
    pub max_height: f64,
    /// Speed loss per G above the onset threshold (1/s per G).
    pub g_force_speed_penalty: f64,
    /// Structural load limit (G). Exceeding it raises the over-G flag.
    pub structural_g_limit: f64,
}

impl Default for FlightEnvelope {
    fn default() -> Self {
        Self {
            max_pitch: 60.0,
            max_roll: 80.0,
            max_angular_rate: 120.0,
            min_airspeed: 22.0,
            max_airspeed: 65.0,
            min_height: -500.0,
            max_height: 7600.0,
            g_force_speed_penalty: 0.015,
            structural_g_limit: 4.5,
        }
    }
}
