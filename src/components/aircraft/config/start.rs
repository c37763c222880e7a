use serde::{Deserialize, Serialize};
use tracing::warn;

use super::FlightEnvelope;

/// Initial pose and engine settings for a new (or reset) flight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartConfig {
    /// Geodetic longitude (degrees).
    pub longitude: f64,
    /// Geodetic latitude (degrees).
    pub latitude: f64,
    /// Height above mean sea level (m).
    pub height: f64,
    /// Compass heading, 0 = north, 90 = east (degrees).
    pub heading: f64,
    /// Pitch attitude, positive nose up (degrees).
    pub pitch: f64,
    /// Bank angle, positive right wing down (degrees).
    pub roll: f64,
    /// Initial airspeed (m/s).
    pub airspeed: f64,
    /// Initial throttle (%).
    pub throttle: f64,
    /// Initial battery/fuel (%).
    pub battery: f64,
    /// Whether the landing gear starts extended.
    pub landing_gear_down: bool,
}

impl Default for StartConfig {
    /// Cruise at 35 m/s with 65 % throttle, 3° nose up, gear down.
    fn default() -> Self {
        Self {
            longitude: 0.0,
            latitude: 0.0,
            height: 1000.0,
            heading: 0.0,
            pitch: 3.0,
            roll: 0.0,
            airspeed: 35.0,
            throttle: 65.0,
            battery: 100.0,
            landing_gear_down: true,
        }
    }
}

impl StartConfig {
    /// Starts at the given geodetic position with the default cruise settings.
    pub fn at_position(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
            ..Default::default()
        }
    }

    /// Starts parked on the ground: stationary, level, engine at idle.
    ///
    /// # Arguments
    /// * `terrain_height` - Terrain elevation under the aircraft (m).
    /// * `wheel_height` - Height of the reference point above the wheels (m).
    pub fn on_runway(longitude: f64, latitude: f64, terrain_height: f64, wheel_height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height: terrain_height + wheel_height,
            pitch: 0.0,
            airspeed: 0.0,
            throttle: 0.0,
            ..Default::default()
        }
    }

    /// Returns a copy with every non-finite or out-of-range field replaced by a safe value.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let pick = |value: f64, fallback: f64, name: &str| {
            if value.is_finite() {
                value
            } else {
                warn!("Non-finite start {} ({}), using {}", name, value, fallback);
                fallback
            }
        };

        Self {
            longitude: pick(self.longitude, defaults.longitude, "longitude"),
            latitude: pick(self.latitude, defaults.latitude, "latitude").clamp(-90.0, 90.0),
            height: pick(self.height, defaults.height, "height"),
            heading: pick(self.heading, defaults.heading, "heading"),
            pitch: pick(self.pitch, defaults.pitch, "pitch"),
            roll: pick(self.roll, defaults.roll, "roll"),
            airspeed: pick(self.airspeed, defaults.airspeed, "airspeed").max(0.0),
            throttle: pick(self.throttle, defaults.throttle, "throttle").clamp(0.0, 100.0),
            battery: pick(self.battery, defaults.battery, "battery").clamp(0.0, 100.0),
            landing_gear_down: self.landing_gear_down,
        }
    }

    /// Sanitizes, then limits pitch and roll to the structural envelope.
    pub fn within_envelope(&self, limits: &FlightEnvelope) -> Self {
        let mut start = self.sanitized();
        let pitch = start.pitch.clamp(-limits.max_pitch, limits.max_pitch);
        let roll = start.roll.clamp(-limits.max_roll, limits.max_roll);
        if pitch != start.pitch || roll != start.roll {
            warn!(
                "Start attitude pitch {:.1}, roll {:.1} outside envelope, using {:.1}, {:.1}",
                start.pitch, start.roll, pitch, roll
            );
        }
        start.pitch = pitch;
        start.roll = roll;
        start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_on_runway_sits_on_wheels() {
        let start = StartConfig::on_runway(32.0, 39.9, 938.0, 1.5);
        assert_relative_eq!(start.height, 939.5);
        assert_relative_eq!(start.airspeed, 0.0);
        assert!(start.landing_gear_down);
    }

    #[test]
    fn test_sanitized_replaces_non_finite() {
        let start = StartConfig {
            airspeed: f64::NAN,
            throttle: 250.0,
            latitude: f64::INFINITY,
            ..Default::default()
        };
        let clean = start.sanitized();
        assert_relative_eq!(clean.airspeed, 35.0);
        assert_relative_eq!(clean.throttle, 100.0);
        assert_relative_eq!(clean.latitude, 0.0);
    }

    #[test]
    fn test_within_envelope_clamps_attitude() {
        let limits = FlightEnvelope::default();
        let start = StartConfig {
            pitch: -75.0,
            roll: 120.0,
            ..Default::default()
        };
        let clean = start.within_envelope(&limits);
        assert_relative_eq!(clean.pitch, -60.0);
        assert_relative_eq!(clean.roll, 80.0);

        let level = StartConfig::default().within_envelope(&limits);
        assert_eq!(level, StartConfig::default());
    }
}
