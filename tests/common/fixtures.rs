use uav_flight::{
    EngineBuilder, EnvironmentConfig, FlightDynamicsEngine, PhysicsConfig, StartConfig, UavConfig,
};

pub const TEST_SEED: u64 = 42;
pub const DT: f64 = 0.02;

/// Reference airframe.
pub fn create_test_config() -> UavConfig {
    UavConfig::predator()
}

/// Seeded engine flying at `start` over sea-level terrain.
pub fn create_engine(start: StartConfig) -> FlightDynamicsEngine {
    create_engine_with_physics(start, PhysicsConfig::with_seed(TEST_SEED))
}

pub fn create_engine_with_physics(start: StartConfig, physics: PhysicsConfig) -> FlightDynamicsEngine {
    EngineBuilder::new()
        .with_config(create_test_config())
        .with_physics(physics)
        .with_environment(EnvironmentConfig::default())
        .with_start(start)
        .build()
        .expect("test engine should build")
}

/// Default cruise at 1000 m.
pub fn create_cruise_engine() -> FlightDynamicsEngine {
    create_engine(StartConfig::at_position(32.99, 39.93, 1000.0))
}

/// Airborne at `height` m above sea-level terrain with the given pitch.
pub fn create_low_engine(height: f64, pitch: f64, gear_down: bool) -> FlightDynamicsEngine {
    create_engine(StartConfig {
        height,
        pitch,
        landing_gear_down: gear_down,
        ..StartConfig::at_position(32.99, 39.93, height)
    })
}

/// Rolling down the runway at `airspeed` with full throttle.
pub fn create_rolling_engine(airspeed: f64) -> FlightDynamicsEngine {
    let wheel_height = create_test_config().ground.wheel_height;
    create_engine(StartConfig {
        airspeed,
        throttle: 100.0,
        ..StartConfig::on_runway(32.99, 39.93, 0.0, wheel_height)
    })
}
