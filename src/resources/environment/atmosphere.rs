use serde::{Deserialize, Serialize};

use crate::utils::{SCALE_HEIGHT, SEA_LEVEL_DENSITY};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    /// Density at mean sea level (kg/m³).
    pub sea_level_density: f64,
    /// Barometric scale height H (m).
    pub scale_height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtmosphereType {
    /// Sea-level density at every height.
    Constant,
    /// Barometric decay `ρ = ρ₀·e^(−h/H)`.
    Exponential,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Exponential,
            sea_level_density: SEA_LEVEL_DENSITY,
            scale_height: SCALE_HEIGHT,
        }
    }
}

impl AtmosphereConfig {
    pub fn constant(density: f64) -> Self {
        Self {
            model_type: AtmosphereType::Constant,
            sea_level_density: density,
            ..Default::default()
        }
    }

    /// Air density at `height` metres above mean sea level.
    ///
    /// Strictly positive and monotonically non-increasing for every finite height.
    pub fn density(&self, height: f64) -> f64 {
        match self.model_type {
            AtmosphereType::Constant => self.sea_level_density,
            AtmosphereType::Exponential => {
                // exp() overflows past ~709; deep negative heights are not physical anyway
                let exponent = (-height / self.scale_height).min(700.0);
                (self.sea_level_density * exponent.exp()).max(f64::MIN_POSITIVE)
            }
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.sea_level_density.is_finite() && self.sea_level_density > 0.0) {
            return Err(format!(
                "sea_level_density must be positive, got {}",
                self.sea_level_density
            ));
        }
        if !(self.scale_height.is_finite() && self.scale_height > 0.0) {
            return Err(format!(
                "scale_height must be positive, got {}",
                self.scale_height
            ));
        }
        Ok(())
    }
}
