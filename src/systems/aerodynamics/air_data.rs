use crate::resources::{AtmosphereConfig, WindVector};
use crate::utils::{deg_to_rad, rad_to_deg, MIN_TRUE_AIRSPEED};

/// Air-relative quantities for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirDataCalculation {
    /// Wind-corrected airspeed, floored at a small positive value (m/s).
    pub true_airspeed: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// ½ρV² (Pa).
    pub dynamic_pressure: f64,
    /// Angle of attack α = θ − γ (radians).
    pub alpha: f64,
}

impl AirDataCalculation {
    /// # Arguments
    /// * `airspeed` - Airspeed along the flight path (m/s).
    /// * `heading` - Compass heading (degrees).
    /// * `pitch` - Pitch attitude θ (degrees).
    /// * `flight_path_angle` - Flight-path angle γ (degrees).
    /// * `height` - Height above mean sea level (m).
    pub fn calculate(
        airspeed: f64,
        heading: f64,
        pitch: f64,
        flight_path_angle: f64,
        height: f64,
        wind: &WindVector,
        atmosphere: &AtmosphereConfig,
    ) -> Self {
        let true_airspeed = true_airspeed(airspeed, heading, wind);
        let density = atmosphere.density(height);
        let dynamic_pressure = 0.5 * density * true_airspeed * true_airspeed;
        let alpha = deg_to_rad(pitch) - deg_to_rad(flight_path_angle);

        Self {
            true_airspeed,
            density,
            dynamic_pressure,
            alpha,
        }
    }

    pub fn alpha_deg(&self) -> f64 {
        rad_to_deg(self.alpha)
    }
}

/// Airspeed minus the heading-projected wind, floored so dynamic pressure never degenerates.
///
/// A tailwind lowers the true airspeed, a headwind raises it.
pub fn true_airspeed(airspeed: f64, heading: f64, wind: &WindVector) -> f64 {
    let along = if wind.is_calm() {
        0.0
    } else {
        wind.along_heading(heading)
    };
    (airspeed - along).max(MIN_TRUE_AIRSPEED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_calm_air() {
        let air = AirDataCalculation::calculate(
            35.0,
            0.0,
            3.0,
            0.0,
            0.0,
            &WindVector::calm(),
            &AtmosphereConfig::default(),
        );
        assert_relative_eq!(air.true_airspeed, 35.0);
        assert_relative_eq!(air.dynamic_pressure, 0.5 * 1.225 * 35.0 * 35.0);
        assert_relative_eq!(air.alpha_deg(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_headwind_and_tailwind() {
        let from_north = WindVector::new(0.0, -10.0);
        assert_relative_eq!(true_airspeed(30.0, 0.0, &from_north), 40.0);
        assert_relative_eq!(true_airspeed(30.0, 180.0, &from_north), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_floor_when_stationary() {
        let tailwind = WindVector::new(0.0, 10.0);
        assert_relative_eq!(true_airspeed(0.0, 0.0, &tailwind), MIN_TRUE_AIRSPEED);
        assert_relative_eq!(true_airspeed(0.0, 0.0, &WindVector::calm()), MIN_TRUE_AIRSPEED);
    }

    #[test]
    fn test_alpha_is_pitch_minus_gamma() {
        let air = AirDataCalculation::calculate(
            35.0,
            0.0,
            10.0,
            4.0,
            1000.0,
            &WindVector::calm(),
            &AtmosphereConfig::default(),
        );
        assert_relative_eq!(air.alpha_deg(), 6.0, epsilon = 1e-12);
        assert!(air.density < 1.225);
    }
}
