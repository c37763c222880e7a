use core::fmt::Debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::components::aircraft::config::{
    AeroCoefficients, AircraftGeometry, ConfigError, ControlAuthority, DragChuteConfig,
    FlightEnvelope, GroundConfig, LandingGearConfig, LandingLimits, MassModel, PowerplantConfig,
    RawAircraftConfig,
};

/// The full airframe configuration used by the flight dynamics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UavConfig {
    /// Name of the aircraft, defaults to type name.
    pub name: String,
    /// Type of aircraft represented as an enum.
    pub ac_type: AircraftType,
    /// Mass of the airframe.
    pub mass: MassModel,
    /// Wing area and span.
    pub geometry: AircraftGeometry,
    /// Lift and drag polar.
    pub aero_coef: AeroCoefficients,
    /// Engine and propeller model.
    pub propulsion: PowerplantConfig,
    /// Control authority, damping and static stability.
    pub controls: ControlAuthority,
    /// Attitude, rate, speed and height limits.
    pub limits: FlightEnvelope,
    /// Wheel contact and take-off roll constants.
    pub ground: GroundConfig,
    /// Touchdown crash criteria.
    pub landing: LandingLimits,
    /// Drag chute behaviour.
    pub chute: DragChuteConfig,
    /// Landing gear actuation.
    pub gear: LandingGearConfig,
}

impl Default for UavConfig {
    /// The `Predator` configuration is chosen as the default.
    fn default() -> Self {
        Self::predator()
    }
}

impl UavConfig {
    /// Creates a new airframe configuration from a given source.
    ///
    /// # Arguments
    /// * `source` - An `AircraftSource` enum specifying if the configuration is hardcoded
    ///              (`Programmed`) or loaded from a file (`File`).
    ///
    /// # Returns
    /// A `Result` containing the new configuration or an error if the file fails to load.
    pub fn new(source: AircraftSource) -> Result<Self, ConfigError> {
        match source {
            AircraftSource::Programmed(aircraft_type) => Ok(Self::from_programmed(aircraft_type)),
            AircraftSource::File(path) => Self::from_file(path),
        }
    }

    fn from_programmed(aircraft_type: AircraftType) -> Self {
        match aircraft_type {
            AircraftType::Predator => Self {
                name: "Predator".to_string(),
                ac_type: AircraftType::Predator,
                mass: MassModel::predator(),
                geometry: AircraftGeometry::predator(),
                aero_coef: AeroCoefficients::predator(),
                propulsion: PowerplantConfig::predator(),
                controls: ControlAuthority::default(),
                limits: FlightEnvelope::default(),
                ground: GroundConfig::default(),
                landing: LandingLimits::default(),
                chute: DragChuteConfig::default(),
                gear: LandingGearConfig::default(),
            },
            AircraftType::Custom(name) => Self {
                name: name.clone(),
                ac_type: AircraftType::Custom(name),
                ..Self::predator()
            },
        }
    }

    /// Creates an airframe configuration by reading from a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to the YAML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&file_contents)
    }

    /// Parses the flat YAML layout from a string.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let raw_config: RawAircraftConfig = serde_yaml::from_str(contents)?;
        Self::from_raw(raw_config)
    }

    pub fn predator() -> Self {
        Self::from_programmed(AircraftType::Predator)
    }

    /// Checks that every parameter is finite, and that everything the integrator
    /// divides by or clamps against has a usable sign.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lift = &self.aero_coef.lift;
        let controls = &self.controls;
        let limits = &self.limits;
        let ground = &self.ground;
        let landing = &self.landing;

        let positive = [
            ("mass", self.mass.mass),
            ("wing_area", self.geometry.wing_area),
            ("wingspan", self.geometry.wing_span),
            ("CLmax", lift.c_l_max),
            ("stall_aoa", lift.stall_aoa),
            ("max_thrust", self.propulsion.max_thrust),
            ("prop_speed_limit", self.propulsion.prop_speed_limit),
            ("max_pitch", limits.max_pitch),
            ("max_roll", limits.max_roll),
            ("max_angular_rate", limits.max_angular_rate),
            ("min_airspeed", limits.min_airspeed),
            ("max_airspeed", limits.max_airspeed),
            ("structural_g_limit", limits.structural_g_limit),
            ("rotation_speed", ground.rotation_speed),
            ("cruise_speed", controls.cruise_speed),
            ("gear_deploy_time", self.gear.deploy_time),
            ("drag_chute_deploy_speed", self.chute.deploy_speed),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }

        let non_negative = [
            ("CD0", self.aero_coef.drag.c_d_0),
            ("K", self.aero_coef.drag.k),
            ("stall_sharpness", lift.stall_sharpness),
            ("ground_effect_multiplier", lift.ground_effect_multiplier),
            ("idle_thrust", self.propulsion.idle_thrust),
            ("thrust_lag", self.propulsion.thrust_lag),
            ("min_prop_efficiency", self.propulsion.min_prop_efficiency),
            ("throttle_rate", self.propulsion.throttle_rate),
            ("throttle_drain", self.propulsion.throttle_drain),
            ("elevator_authority", controls.elevator),
            ("aileron_authority", controls.aileron),
            ("rudder_authority", controls.rudder),
            ("pitch_damping", controls.pitch_damping),
            ("roll_damping", controls.roll_damping),
            ("yaw_damping", controls.yaw_damping),
            ("roll_stability", controls.roll_stability),
            ("pitch_stability", controls.pitch_stability),
            ("min_effectiveness", controls.min_effectiveness),
            ("buffet_amplitude", controls.buffet_amplitude),
            ("g_force_speed_penalty", limits.g_force_speed_penalty),
            ("wheel_height", ground.wheel_height),
            ("rolling_resistance", ground.rolling_resistance),
            ("ground_friction", ground.ground_friction),
            ("brake_efficiency", ground.brake_efficiency),
            ("taxi_yaw_rate", ground.taxi_yaw_rate),
            ("takeoff_pitch_rate", ground.takeoff_pitch_rate),
            ("roll_leveling", ground.roll_leveling),
            ("touchdown_damping", landing.touchdown_damping),
            ("touchdown_gamma_damping", landing.touchdown_gamma_damping),
            ("drag_chute_multiplier", self.chute.drag_multiplier),
            ("drag_chute_min_speed", self.chute.min_speed),
            ("drag_chute_max_altitude", self.chute.max_altitude),
            ("drag_chute_area", self.chute.area),
            ("drag_chute_drag_coefficient", self.chute.drag_coefficient),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }

        let finite = [
            ("CL0", lift.c_l_0),
            ("CLalpha", lift.c_l_alpha),
            ("trim_aoa", lift.trim_aoa),
            ("speed_stall_margin", lift.speed_stall_margin),
            ("stability_input_threshold", controls.stability_input_threshold),
            ("max_effectiveness", controls.max_effectiveness),
            ("buffet_threshold", controls.buffet_threshold),
            ("min_height", limits.min_height),
            ("max_height", limits.max_height),
            ("brake_throttle", ground.brake_throttle),
            ("roll_to_steer", ground.roll_to_steer),
            ("max_takeoff_aoa", ground.max_takeoff_aoa),
            ("min_gear_progress", landing.min_gear_progress),
            ("max_landing_vertical_speed", landing.max_vertical_speed),
            ("hard_landing_threshold", landing.hard_impact_vertical_speed),
            ("max_landing_roll", landing.max_roll),
            ("nose_gear_max_pitch", landing.nose_gear_max_pitch),
            ("tail_strike_pitch", landing.tail_strike_pitch),
            ("collision_warning_margin", landing.collision_warning_margin),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::ValidationError(format!(
                "{} must be finite, got {}",
                name, value
            )));
        }

        if self.propulsion.idle_thrust > self.propulsion.max_thrust {
            return Err(ConfigError::ValidationError(
                "idle_thrust exceeds max_thrust".to_string(),
            ));
        }
        if self.limits.min_airspeed >= self.limits.max_airspeed {
            return Err(ConfigError::ValidationError(
                "min_airspeed must be below max_airspeed".to_string(),
            ));
        }
        if self.limits.min_height >= self.limits.max_height {
            return Err(ConfigError::ValidationError(
                "min_height must be below max_height".to_string(),
            ));
        }
        if self.controls.min_effectiveness > self.controls.max_effectiveness {
            return Err(ConfigError::ValidationError(
                "min_effectiveness exceeds max_effectiveness".to_string(),
            ));
        }
        Ok(())
    }
}

/// Source for airframe configuration.
/// Can either be a hardcoded configuration (`Programmed`) or loaded from a file.
#[derive(Debug, Clone)]
pub enum AircraftSource {
    Programmed(AircraftType),
    File(PathBuf),
}

/// Enumeration of available airframe types.
#[derive(Debug, Clone, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum AircraftType {
    Predator,
    Custom(String),
}
