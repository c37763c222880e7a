use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::utils::{deg_to_rad, heading_unit};

/// Horizontal wind in the world frame, supplied by the weather collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindVector {
    /// Component blowing toward the east (m/s).
    pub x: f64,
    /// Component blowing toward the north (m/s).
    pub y: f64,
    /// Scalar wind speed (m/s). A zero speed disables the wind correction.
    pub speed: f64,
}

impl WindVector {
    /// Creates a wind from its east and north components.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            speed: x.hypot(y),
        }
    }

    pub fn calm() -> Self {
        Self::default()
    }

    /// Creates a wind blowing toward `bearing` degrees (0 = north, 90 = east).
    ///
    /// # Arguments
    /// * `speed` - Wind speed (m/s).
    /// * `bearing` - Direction the air is moving toward (degrees).
    pub fn from_bearing(speed: f64, bearing: f64) -> Self {
        let angle_rad = deg_to_rad(bearing);
        Self {
            x: speed * angle_rad.sin(),
            y: speed * angle_rad.cos(),
            speed,
        }
    }

    pub fn is_calm(&self) -> bool {
        self.speed <= 0.0
    }

    pub fn as_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Component along the aircraft heading; positive is a tailwind.
    pub fn along_heading(&self, heading_deg: f64) -> f64 {
        self.as_vector().dot(&heading_unit(heading_deg))
    }

    /// Component across the aircraft heading; positive blows from left to right.
    pub fn across_heading(&self, heading_deg: f64) -> f64 {
        let forward = heading_unit(heading_deg);
        let right = Vector2::new(forward.y, -forward.x);
        self.as_vector().dot(&right)
    }

    /// True when all three fields are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.speed.is_finite()
    }
}
