mod common;

use common::*;
use std::sync::{Arc, Mutex};
use uav_flight::{
    components::ImpactSeverity, CrashEvent, CrashReason, StartConfig,
};

#[test]
fn test_gear_up_touchdown_crashes() {
    let mut engine = create_low_engine(1.0, 3.0, false);
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    engine.on_crash(move |event: &CrashEvent| sink.lock().unwrap().push(event.clone()));

    let event = engine.update(DT).expect("belly landing should crash");
    assert!(matches!(event.reason, CrashReason::GearUp { gear_down: false, .. }));
    assert_eq!(event.reason.code(), "gear_up");

    let data = engine.snapshot();
    assert!(data.is_crashed);
    assert!(!data.is_powered);
    assert_eq!(data.throttle, 0.0);
    assert_eq!(data.airspeed, 0.0);
    assert_eq!(data.climb_rate, 0.0);
    assert!(data.crash_message().to_lowercase().contains("gear"));

    // terminal: nothing moves and the observer is not called again
    assert!(fly(&mut engine, (1.0, 1.0, 0.0, 1.0), 50).is_none());
    assert_eq!(engine.snapshot(), data);
    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_gentle_touchdown_rolls_out() {
    let mut engine = create_low_engine(3.0, 6.0, true);
    let config = create_test_config();

    let touchdown = wait_for_condition(&mut engine, neutral_controls(), |d| d.is_grounded, 500)
        .expect("should touch down");
    assert!(!touchdown.is_crashed);
    assert!(touchdown.vertical_speed > config.landing.max_vertical_speed);

    assert!(simulate_duration(&mut engine, 5.0).is_none());
    let data = engine.snapshot();
    assert!(data.is_grounded);
    assert!(!data.is_crashed);
    assert!(data.ground_contact_time > 4.0);
    assert_eq!(data.climb_rate, 0.0);
    assert!((data.height_above_terrain - config.ground.wheel_height).abs() < 1e-9);
    assert_flight_data_valid(&data, &config, config.limits.max_airspeed);
}

#[test]
fn test_fast_sink_is_hard_impact() {
    let mut engine = create_low_engine(30.0, 0.0, true);
    let event = fly(&mut engine, neutral_controls(), 1000).expect("should hit hard");
    match event.reason.clone() {
        CrashReason::ExcessiveSinkRate {
            vertical_speed,
            limit,
            severity,
        } => {
            assert!(vertical_speed < limit);
            assert_eq!(severity, ImpactSeverity::HardImpact);
        }
        other => panic!("unexpected crash reason {:?}", other),
    }
    assert_eq!(engine.snapshot().crash_reason, Some(event.reason));
}

#[test]
fn test_descent_raises_collision_warning() {
    let mut engine = create_low_engine(30.0, 0.0, true);
    let warned = wait_for_condition(
        &mut engine,
        neutral_controls(),
        |d| d.is_collision_warning || d.is_crashed,
        1000,
    )
    .expect("should warn before impact");
    assert!(warned.is_collision_warning);
    assert!(!warned.is_crashed);
}

#[test]
fn test_reset_after_crash_flies_again() {
    let mut engine = create_low_engine(1.0, 3.0, false);
    assert!(engine.update(DT).is_some());

    engine.reset(StartConfig::at_position(32.99, 39.93, 800.0));
    let data = engine.snapshot();
    assert!(!data.is_crashed);
    assert!(data.is_powered);
    assert_eq!(data.sim_time, 0.0);
    assert_eq!(data.altitude, 800.0);

    assert!(simulate_duration(&mut engine, 1.0).is_none());
    assert!(engine.snapshot().sim_time > 0.9);
}

#[test]
fn test_terrain_rising_under_aircraft() {
    let mut engine = create_cruise_engine();
    assert!(engine.set_terrain_height(995.0).is_none());
    assert!(engine.snapshot().is_collision_warning);

    let event = engine.set_terrain_height(1200.0).expect("buried by terrain");
    assert_eq!(event.reason.code(), "terrain_impact");
    assert!(engine.update(DT).is_none());
}
