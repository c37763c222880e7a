mod common;

use common::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uav_flight::{EngineBuilder, PhysicsConfig, SimError, StartConfig, WindVector};

#[test]
fn test_random_inputs_keep_state_coherent() {
    let mut engine = create_cruise_engine();
    let config = create_test_config();
    let speed_limit = config.limits.max_airspeed;
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let mut previous = engine.snapshot();

    for tick in 0..6000 {
        let axis = |rng: &mut ChaCha8Rng| -> f64 {
            if rng.gen_bool(0.01) {
                f64::NAN
            } else {
                rng.gen_range(-2.0..2.0)
            }
        };
        let (pitch, roll, yaw, throttle) = (axis(&mut rng), axis(&mut rng), axis(&mut rng), axis(&mut rng));
        engine.set_input(pitch, roll, yaw, throttle);

        if tick % 500 == 0 {
            engine.set_wind(WindVector::new(rng.gen_range(-8.0..8.0), rng.gen_range(-8.0..8.0)));
        }
        if tick % 700 == 350 {
            engine.toggle_drag_chute();
            engine.toggle_landing_gear();
            // a jettison drops progress to zero at once
            previous = engine.snapshot();
        }

        let dt = match rng.gen_range(0..20) {
            0 => f64::NAN,
            1 => 0.0,
            2 => -0.01,
            3 => 1.0,
            _ => rng.gen_range(0.005..0.04),
        };
        let crashed = engine.update(dt).is_some();

        let data = engine.snapshot();
        assert_flight_data_valid(&data, &config, speed_limit);
        assert!(data.sim_time >= previous.sim_time);

        // clamped step never exceeds max_timestep
        let max_dt = engine.physics().max_timestep;
        assert_progress_step(
            previous.drag_chute_progress,
            data.drag_chute_progress,
            2.0 * config.chute.deploy_speed * max_dt,
        );
        if !crashed {
            assert_progress_step(
                previous.gear_deploy_progress,
                data.gear_deploy_progress,
                max_dt / config.gear.deploy_time,
            );
        }

        if data.is_crashed {
            engine.reset(StartConfig::at_position(32.99, 39.93, 1000.0));
        }
        previous = engine.snapshot();
    }
}

#[test]
fn test_invalid_timesteps_do_nothing() {
    let mut engine = create_cruise_engine();
    let before = engine.snapshot();
    for dt in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -0.5] {
        assert!(engine.update(dt).is_none());
    }
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_airspeed_capped_in_dive() {
    let mut engine = create_cruise_engine();
    let config = create_test_config();
    // nose down, full power
    fly(&mut engine, (-1.0, 0.0, 0.0, 1.0), 500);
    let data = engine.snapshot();
    assert!(data.airspeed <= config.limits.max_airspeed + 1e-9);
    assert!(data.max_speed <= config.limits.max_airspeed + 1e-9);
}

#[test]
fn test_unrestricted_mode_requires_opt_in() {
    let mut engine = create_cruise_engine();
    assert!(matches!(
        engine.set_unrestricted(true),
        Err(SimError::UnrestrictedModeDisabled)
    ));
    simulate_duration(&mut engine, 1.0);
    assert!(!engine.snapshot().unrestricted);
}

#[test]
fn test_unrestricted_mode_exceeds_envelope() {
    let physics = PhysicsConfig {
        allow_unrestricted: true,
        ..PhysicsConfig::with_seed(TEST_SEED)
    };
    let mut engine = create_engine_with_physics(StartConfig::at_position(32.99, 39.93, 1000.0), physics);
    engine.set_unrestricted(true).unwrap();

    assert!(fly(&mut engine, neutral_controls(), 10).is_none());
    let data = engine.snapshot();
    assert!(data.unrestricted);
    assert_eq!(data.throttle, 100.0);
    assert!(data.airspeed > create_test_config().limits.max_airspeed);

    engine.set_unrestricted(false).unwrap();
    engine.update(DT);
    assert!(engine.snapshot().airspeed <= create_test_config().limits.max_airspeed + 1e-9);
}

#[test]
fn test_empty_battery_cuts_throttle() {
    let mut engine = create_engine(StartConfig {
        throttle: 100.0,
        battery: 0.0005,
        ..StartConfig::at_position(32.99, 39.93, 1000.0)
    });
    engine.update(DT);
    assert_eq!(engine.snapshot().battery, 0.0);

    fly(&mut engine, (0.0, 0.0, 0.0, 1.0), 10);
    let data = engine.snapshot();
    assert_eq!(data.throttle, 0.0);
    assert_eq!(data.battery, 0.0);
}

#[test]
fn test_statistics_track_flight() {
    let mut engine = create_cruise_engine();
    simulate_duration(&mut engine, 10.0);
    let data = engine.snapshot();
    assert!(data.total_distance > 200.0);
    assert!(data.max_altitude >= 1000.0);
    assert!(data.max_g > 0.0);
    assert!(data.max_speed >= data.airspeed);
}

#[test]
fn test_over_g_flag_tracks_structural_limit() {
    let mut engine = create_cruise_engine();
    engine.update(DT);
    let data = engine.snapshot();
    assert!(!data.is_over_g, "cruise at {} G flagged over-G", data.g_force);

    let mut config = create_test_config();
    config.limits.structural_g_limit = 0.5;
    let mut engine = EngineBuilder::new()
        .with_config(config)
        .with_seed(TEST_SEED)
        .with_start(StartConfig::at_position(32.99, 39.93, 1000.0))
        .build()
        .unwrap();
    assert!(!engine.snapshot().is_over_g);
    engine.update(DT);
    let data = engine.snapshot();
    assert!(data.g_force > 0.5);
    assert!(data.is_over_g);
    assert!(data.max_g >= data.g_force);
}

#[test]
fn test_start_attitude_limited_before_first_update() {
    let config = create_test_config();
    let start = StartConfig {
        pitch: 85.0,
        roll: -120.0,
        ..StartConfig::at_position(32.99, 39.93, 1000.0)
    };
    let mut engine = create_engine(start.clone());

    let data = engine.snapshot();
    assert_eq!(data.pitch, config.limits.max_pitch);
    assert_eq!(data.roll, -config.limits.max_roll);

    engine.reset(start);
    let data = engine.snapshot();
    assert_eq!(data.pitch, config.limits.max_pitch);
    assert_eq!(data.roll, -config.limits.max_roll);
}

#[test]
fn test_crosswind_reported_in_snapshot() {
    let mut engine = create_engine(StartConfig {
        heading: 90.0,
        ..StartConfig::at_position(32.99, 39.93, 1000.0)
    });
    engine.set_wind(WindVector::new(0.0, -4.0));
    let data = engine.snapshot();
    assert!((data.crosswind - 4.0).abs() < 1e-9, "crosswind {}", data.crosswind);
}
