use serde::{Deserialize, Serialize};

/// Planform dimensions used for lift, drag and ground effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// Reference wing area S (m²).
    pub wing_area: f64,
    /// Tip-to-tip span b (m). Also the ground effect ceiling.
    pub wing_span: f64,
}

impl AircraftGeometry {
    pub fn new(wing_area: f64, wing_span: f64) -> Self {
        Self {
            wing_area,
            wing_span,
        }
    }

    /// Aspect ratio `b² / S`.
    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span * self.wing_span / self.wing_area
    }

    pub fn predator() -> Self {
        Self::new(11.45, 14.8) // AR ≈ 19.1
    }
}

impl Default for AircraftGeometry {
    fn default() -> Self {
        Self::predator()
    }
}
