use serde::{Deserialize, Serialize};

/// Mass properties of the airframe.
///
/// Rotational inertia is folded into the per-axis authority and damping terms of
/// [`ControlAuthority`](super::ControlAuthority), so only the total mass is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MassModel {
    /// Total mass of the aircraft (kg).
    pub mass: f64,
}

impl MassModel {
    pub fn new(mass: f64) -> Self {
        Self { mass }
    }

    /// Weight in newtons for the given gravitational acceleration.
    pub fn weight(&self, gravity: f64) -> f64 {
        self.mass * gravity
    }

    pub fn predator() -> Self {
        Self::new(1020.0) // maximum take-off weight
    }
}

impl Default for MassModel {
    fn default() -> Self {
        Self::predator()
    }
}
