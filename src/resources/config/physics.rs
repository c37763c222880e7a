use serde::{Deserialize, Serialize};

use crate::utils::{GRAVITY, MAX_TIMESTEP, MIN_TIMESTEP};

/// Integrator settings shared by every airframe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Largest step `update` will integrate; longer frames are truncated (s).
    pub max_timestep: f64,
    /// Smallest step; shorter positive frames are stretched to this (s).
    pub min_timestep: f64,
    /// Seed for the stall-buffet RNG. `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Must be set before unrestricted mode can be switched on.
    pub allow_unrestricted: bool,
    pub unrestricted: UnrestrictedConfig,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_timestep: MAX_TIMESTEP,
            min_timestep: MIN_TIMESTEP,
            seed: None,
            allow_unrestricted: false,
            unrestricted: UnrestrictedConfig::default(),
        }
    }
}

impl PhysicsConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Clamps a frame delta into the integrable range, or `None` when the frame
    /// must be skipped (non-finite or non-positive).
    pub fn clamp_timestep(&self, dt: f64) -> Option<f64> {
        if !dt.is_finite() || dt <= 0.0 {
            return None;
        }
        Some(dt.clamp(self.min_timestep, self.max_timestep))
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(format!("gravity must be positive, got {}", self.gravity));
        }
        if !(self.min_timestep.is_finite()
            && self.max_timestep.is_finite()
            && self.min_timestep > 0.0
            && self.min_timestep <= self.max_timestep)
        {
            return Err(format!(
                "timestep range [{}, {}] is invalid",
                self.min_timestep, self.max_timestep
            ));
        }
        self.unrestricted.validate()
    }
}

/// Out-of-envelope test mode: throttle pinned, drag nearly removed, thrust far
/// above rating. Only reachable through an explicit, gated call on the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnrestrictedConfig {
    /// Airspeed ceiling replacing the never-exceed speed (m/s).
    pub speed_limit: f64,
    /// Multiplier applied to total drag.
    pub drag_scale: f64,
    /// Fixed thrust replacing the engine model (N).
    pub thrust: f64,
}

impl Default for UnrestrictedConfig {
    fn default() -> Self {
        Self {
            speed_limit: 2778.0, // 10 000 km/h
            drag_scale: 0.001,
            thrust: 1.0e6,
        }
    }
}

impl UnrestrictedConfig {
    fn validate(&self) -> Result<(), String> {
        if !(self.speed_limit.is_finite() && self.speed_limit > 0.0) {
            return Err(format!(
                "unrestricted speed_limit must be positive, got {}",
                self.speed_limit
            ));
        }
        if !(self.drag_scale.is_finite() && self.drag_scale >= 0.0) {
            return Err(format!(
                "unrestricted drag_scale must be non-negative, got {}",
                self.drag_scale
            ));
        }
        if !self.thrust.is_finite() {
            return Err("unrestricted thrust must be finite".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_timestep() {
        let config = PhysicsConfig::default();
        assert_eq!(config.clamp_timestep(0.0), None);
        assert_eq!(config.clamp_timestep(-0.1), None);
        assert_eq!(config.clamp_timestep(f64::NAN), None);
        assert_eq!(config.clamp_timestep(f64::INFINITY), None);
        assert_relative_eq!(config.clamp_timestep(0.5).unwrap(), 0.05);
        assert_relative_eq!(config.clamp_timestep(1e-9).unwrap(), 1e-4);
        assert_relative_eq!(config.clamp_timestep(0.016).unwrap(), 0.016);
    }

    #[test]
    fn test_default_is_valid_and_gated() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.allow_unrestricted);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_inverted_timestep_range_rejected() {
        let config = PhysicsConfig {
            min_timestep: 0.1,
            max_timestep: 0.05,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
