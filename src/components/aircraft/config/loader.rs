use serde::Deserialize;
use thiserror::Error;

use crate::components::aircraft::config::{
    AeroCoefficients, AircraftGeometry, AircraftType, ControlAuthority, DragChuteConfig,
    FlightEnvelope, GroundConfig, LandingGearConfig, LandingLimits, MassModel, PowerplantConfig,
    UavConfig,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Flat airframe description as written in YAML files.
///
/// Every key is optional; anything missing falls back to the reference airframe.
#[allow(non_snake_case)]
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAircraftConfig {
    /// Aircraft identification
    pub name: Option<String>,

    /// Mass and geometry
    pub mass: Option<f64>,
    pub wing_area: Option<f64>,
    pub wingspan: Option<f64>,

    /// Lift coefficients
    pub CL0: Option<f64>,
    pub CLalpha: Option<f64>,
    pub CLmax: Option<f64>,
    pub stall_aoa: Option<f64>,
    pub stall_sharpness: Option<f64>,
    pub trim_aoa: Option<f64>,
    pub ground_effect_multiplier: Option<f64>,

    /// Drag coefficients
    pub CD0: Option<f64>,
    pub K: Option<f64>,

    /// Propulsion
    pub max_thrust: Option<f64>,
    pub idle_thrust: Option<f64>,
    pub thrust_lag: Option<f64>,
    pub throttle_rate: Option<f64>,
    pub throttle_drain: Option<f64>,

    /// Control authority
    pub elevator_authority: Option<f64>,
    pub aileron_authority: Option<f64>,
    pub rudder_authority: Option<f64>,
    pub pitch_damping: Option<f64>,
    pub roll_damping: Option<f64>,
    pub yaw_damping: Option<f64>,
    pub roll_stability: Option<f64>,
    pub pitch_stability: Option<f64>,

    /// Limits
    pub max_pitch: Option<f64>,
    pub max_roll: Option<f64>,
    pub max_angular_rate: Option<f64>,
    pub min_airspeed: Option<f64>,
    pub max_airspeed: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub g_force_speed_penalty: Option<f64>,
    pub structural_g_limit: Option<f64>,

    /// Ground handling
    pub wheel_height: Option<f64>,
    pub rolling_resistance: Option<f64>,
    pub ground_friction: Option<f64>,
    pub brake_efficiency: Option<f64>,
    pub taxi_yaw_rate: Option<f64>,
    pub rotation_speed: Option<f64>,
    pub takeoff_pitch_rate: Option<f64>,
    pub max_takeoff_aoa: Option<f64>,

    /// Touchdown limits
    pub max_landing_vertical_speed: Option<f64>,
    pub hard_landing_threshold: Option<f64>,
    pub max_landing_roll: Option<f64>,
    pub nose_gear_max_pitch: Option<f64>,
    pub touchdown_damping: Option<f64>,

    /// Drag chute and landing gear
    pub drag_chute_multiplier: Option<f64>,
    pub drag_chute_deploy_speed: Option<f64>,
    pub drag_chute_min_speed: Option<f64>,
    pub drag_chute_max_altitude: Option<f64>,
    pub drag_chute_area: Option<f64>,
    pub gear_deploy_time: Option<f64>,
}

impl UavConfig {
    /// Converts the flat YAML layout into the structured configuration.
    ///
    /// # Arguments
    /// * `raw` - A `RawAircraftConfig` containing the deserialized fields.
    ///
    /// # Returns
    /// The structured configuration, validated.
    pub fn from_raw(raw: RawAircraftConfig) -> Result<Self, ConfigError> {
        let base = UavConfig::predator();
        let name = raw.name.unwrap_or_else(|| base.name.clone());

        let mut aero = AeroCoefficients::predator();
        let lift = &mut aero.lift;
        lift.c_l_0 = raw.CL0.unwrap_or(lift.c_l_0);
        lift.c_l_alpha = raw.CLalpha.unwrap_or(lift.c_l_alpha);
        lift.c_l_max = raw.CLmax.unwrap_or(lift.c_l_max);
        lift.stall_aoa = raw.stall_aoa.unwrap_or(lift.stall_aoa);
        lift.stall_sharpness = raw.stall_sharpness.unwrap_or(lift.stall_sharpness);
        lift.trim_aoa = raw.trim_aoa.unwrap_or(lift.trim_aoa);
        lift.ground_effect_multiplier = raw
            .ground_effect_multiplier
            .unwrap_or(lift.ground_effect_multiplier);
        aero.drag.c_d_0 = raw.CD0.unwrap_or(aero.drag.c_d_0);
        aero.drag.k = raw.K.unwrap_or(aero.drag.k);

        let propulsion = PowerplantConfig {
            max_thrust: raw.max_thrust.unwrap_or(base.propulsion.max_thrust),
            idle_thrust: raw.idle_thrust.unwrap_or(base.propulsion.idle_thrust),
            thrust_lag: raw.thrust_lag.unwrap_or(base.propulsion.thrust_lag),
            throttle_rate: raw.throttle_rate.unwrap_or(base.propulsion.throttle_rate),
            throttle_drain: raw.throttle_drain.unwrap_or(base.propulsion.throttle_drain),
            ..base.propulsion.clone()
        };

        let controls = ControlAuthority {
            elevator: raw.elevator_authority.unwrap_or(base.controls.elevator),
            aileron: raw.aileron_authority.unwrap_or(base.controls.aileron),
            rudder: raw.rudder_authority.unwrap_or(base.controls.rudder),
            pitch_damping: raw.pitch_damping.unwrap_or(base.controls.pitch_damping),
            roll_damping: raw.roll_damping.unwrap_or(base.controls.roll_damping),
            yaw_damping: raw.yaw_damping.unwrap_or(base.controls.yaw_damping),
            roll_stability: raw.roll_stability.unwrap_or(base.controls.roll_stability),
            pitch_stability: raw.pitch_stability.unwrap_or(base.controls.pitch_stability),
            ..base.controls
        };

        let limits = FlightEnvelope {
            max_pitch: raw.max_pitch.unwrap_or(base.limits.max_pitch),
            max_roll: raw.max_roll.unwrap_or(base.limits.max_roll),
            max_angular_rate: raw.max_angular_rate.unwrap_or(base.limits.max_angular_rate),
            min_airspeed: raw.min_airspeed.unwrap_or(base.limits.min_airspeed),
            max_airspeed: raw.max_airspeed.unwrap_or(base.limits.max_airspeed),
            min_height: raw.min_height.unwrap_or(base.limits.min_height),
            max_height: raw.max_height.unwrap_or(base.limits.max_height),
            g_force_speed_penalty: raw
                .g_force_speed_penalty
                .unwrap_or(base.limits.g_force_speed_penalty),
            structural_g_limit: raw
                .structural_g_limit
                .unwrap_or(base.limits.structural_g_limit),
        };

        let ground = GroundConfig {
            wheel_height: raw.wheel_height.unwrap_or(base.ground.wheel_height),
            rolling_resistance: raw
                .rolling_resistance
                .unwrap_or(base.ground.rolling_resistance),
            ground_friction: raw.ground_friction.unwrap_or(base.ground.ground_friction),
            brake_efficiency: raw.brake_efficiency.unwrap_or(base.ground.brake_efficiency),
            taxi_yaw_rate: raw.taxi_yaw_rate.unwrap_or(base.ground.taxi_yaw_rate),
            rotation_speed: raw.rotation_speed.unwrap_or(base.ground.rotation_speed),
            takeoff_pitch_rate: raw
                .takeoff_pitch_rate
                .unwrap_or(base.ground.takeoff_pitch_rate),
            max_takeoff_aoa: raw.max_takeoff_aoa.unwrap_or(base.ground.max_takeoff_aoa),
            ..base.ground
        };

        let landing = LandingLimits {
            max_vertical_speed: raw
                .max_landing_vertical_speed
                .unwrap_or(base.landing.max_vertical_speed),
            hard_impact_vertical_speed: raw
                .hard_landing_threshold
                .unwrap_or(base.landing.hard_impact_vertical_speed),
            max_roll: raw.max_landing_roll.unwrap_or(base.landing.max_roll),
            nose_gear_max_pitch: raw
                .nose_gear_max_pitch
                .unwrap_or(base.landing.nose_gear_max_pitch),
            touchdown_damping: raw
                .touchdown_damping
                .unwrap_or(base.landing.touchdown_damping),
            ..base.landing
        };

        let chute = DragChuteConfig {
            drag_multiplier: raw.drag_chute_multiplier.unwrap_or(base.chute.drag_multiplier),
            deploy_speed: raw.drag_chute_deploy_speed.unwrap_or(base.chute.deploy_speed),
            min_speed: raw.drag_chute_min_speed.unwrap_or(base.chute.min_speed),
            max_altitude: raw.drag_chute_max_altitude.unwrap_or(base.chute.max_altitude),
            area: raw.drag_chute_area.unwrap_or(base.chute.area),
            ..base.chute
        };

        let config = Self {
            ac_type: AircraftType::Custom(name.clone()),
            name,
            mass: MassModel::new(raw.mass.unwrap_or(base.mass.mass)),
            geometry: AircraftGeometry::new(
                raw.wing_area.unwrap_or(base.geometry.wing_area),
                raw.wingspan.unwrap_or(base.geometry.wing_span),
            ),
            aero_coef: aero,
            propulsion,
            controls,
            limits,
            ground,
            landing,
            chute,
            gear: LandingGearConfig {
                deploy_time: raw.gear_deploy_time.unwrap_or(base.gear.deploy_time),
            },
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_partial_yaml_falls_back_to_reference() {
        let yaml = "name: Scout\nmass: 450.0\nCLmax: 1.6\nwheel_height: 0.8\n";
        let raw: RawAircraftConfig = serde_yaml::from_str(yaml).unwrap();
        let config = UavConfig::from_raw(raw).unwrap();

        assert_eq!(config.name, "Scout");
        assert_eq!(config.ac_type, AircraftType::Custom("Scout".to_string()));
        assert_relative_eq!(config.mass.mass, 450.0);
        assert_relative_eq!(config.aero_coef.lift.c_l_max, 1.6);
        assert_relative_eq!(config.ground.wheel_height, 0.8);
        assert_relative_eq!(config.geometry.wing_area, 11.45);
        assert_relative_eq!(config.propulsion.max_thrust, 1100.0);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let yaml = "mass: 450.0\nflux_capacitor: 1.21\n";
        assert!(serde_yaml::from_str::<RawAircraftConfig>(yaml).is_err());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let raw = RawAircraftConfig {
            mass: Some(-1.0),
            ..Default::default()
        };
        match UavConfig::from_raw(raw) {
            Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("mass")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
