mod atmosphere;
mod wind;

pub use atmosphere::{AtmosphereConfig, AtmosphereType};
pub use wind::WindVector;

use serde::{Deserialize, Serialize};

/// Environmental conditions the engine starts with.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub atmosphere: AtmosphereConfig,
    pub wind: WindVector,
    /// Terrain elevation under the start position (m AMSL).
    pub terrain_height: f64,
}

impl EnvironmentConfig {
    pub fn new(atmosphere: AtmosphereConfig, wind: WindVector) -> Self {
        Self {
            atmosphere,
            wind,
            terrain_height: 0.0,
        }
    }

    pub fn with_constant_wind(wind_speed: f64, wind_direction: f64) -> Self {
        Self {
            wind: WindVector::from_bearing(wind_speed, wind_direction),
            ..Default::default()
        }
    }

    pub fn with_terrain_height(mut self, terrain_height: f64) -> Self {
        self.terrain_height = terrain_height;
        self
    }
}
