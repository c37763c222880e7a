mod common;

use std::io::Write;

use common::*;
use tempfile::NamedTempFile;
use uav_flight::{
    components::ConfigError, AircraftSource, AircraftType, EngineBuilder, SimError, StartConfig,
    UavConfig,
};

fn write_yaml(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write yaml");
    file
}

#[test]
fn test_yaml_overrides_reference_airframe() {
    let file = write_yaml(
        "name: TestFrame\n\
         mass: 900.0\n\
         CL0: 0.3\n\
         max_thrust: 1500.0\n\
         wheel_height: 1.2\n",
    );
    let config = UavConfig::new(AircraftSource::File(file.path().to_path_buf())).unwrap();

    assert_eq!(config.name, "TestFrame");
    assert_eq!(config.ac_type, AircraftType::Custom("TestFrame".to_string()));
    assert_eq!(config.mass.mass, 900.0);
    assert_eq!(config.aero_coef.lift.c_l_0, 0.3);
    assert_eq!(config.propulsion.max_thrust, 1500.0);
    assert_eq!(config.ground.wheel_height, 1.2);

    let reference = UavConfig::predator();
    assert_eq!(config.geometry, reference.geometry);
    assert_eq!(config.controls, reference.controls);
}

#[test]
fn test_engine_flies_loaded_airframe() {
    let file = write_yaml("name: Light\nmass: 700.0\n");
    let mut engine = EngineBuilder::new()
        .with_source(AircraftSource::File(file.path().to_path_buf()))
        .with_seed(TEST_SEED)
        .with_start(StartConfig::at_position(32.99, 39.93, 1000.0))
        .build()
        .unwrap();
    assert_eq!(engine.config().name, "Light");

    assert!(simulate_duration(&mut engine, 2.0).is_none());
    let config = engine.config().clone();
    assert_flight_data_valid(&engine.snapshot(), &config, config.limits.max_airspeed);
}

#[test]
fn test_unknown_key_rejected() {
    let file = write_yaml("name: Typo\nmas: 900.0\n");
    let result = UavConfig::new(AircraftSource::File(file.path().to_path_buf()));
    assert!(matches!(result, Err(ConfigError::YamlError(_))));
}

#[test]
fn test_invalid_values_rejected() {
    let file = write_yaml("mass: -5.0\n");
    let result = EngineBuilder::new()
        .with_source(AircraftSource::File(file.path().to_path_buf()))
        .build();
    assert!(matches!(
        result,
        Err(SimError::Config(ConfigError::ValidationError(_)))
    ));
}

#[test]
fn test_missing_file_reported() {
    let dir = tempfile::tempdir().unwrap();
    let result = UavConfig::new(AircraftSource::File(dir.path().join("absent.yaml")));
    assert!(matches!(result, Err(ConfigError::FileError(_))));
}

#[test]
fn test_negative_angular_rate_rejected() {
    let file = write_yaml("max_angular_rate: -10.0\n");
    let loaded = UavConfig::new(AircraftSource::File(file.path().to_path_buf()));
    assert!(matches!(loaded, Err(ConfigError::ValidationError(_))));

    let result = EngineBuilder::new()
        .with_source(AircraftSource::File(file.path().to_path_buf()))
        .build();
    assert!(matches!(
        result,
        Err(SimError::Config(ConfigError::ValidationError(_)))
    ));
}

#[test]
fn test_nan_damping_rejected() {
    let file = write_yaml("roll_damping: .nan\n");
    let result = UavConfig::new(AircraftSource::File(file.path().to_path_buf()));
    match result {
        Err(ConfigError::ValidationError(message)) => assert!(message.contains("roll_damping")),
        other => panic!("expected validation error, got {:?}", other),
    }
}
