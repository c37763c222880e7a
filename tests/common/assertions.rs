use approx::assert_relative_eq;
use uav_flight::{FlightData, UavConfig};

/// Assert that a snapshot is physically coherent for `config`.
#[track_caller]
pub fn assert_flight_data_valid(data: &FlightData, config: &UavConfig, speed_limit: f64) {
    for (name, value) in data.numeric_fields() {
        assert!(value.is_finite(), "{} is not finite: {}", name, value);
    }

    assert!(data.airspeed >= 0.0, "Negative airspeed {}", data.airspeed);
    assert!(data.airspeed <= speed_limit, "Airspeed {} above limit", data.airspeed);
    assert!((0.0..=100.0).contains(&data.throttle), "Throttle {} out of range", data.throttle);
    assert!((0.0..=100.0).contains(&data.battery), "Battery {} out of range", data.battery);
    assert!((0.0..360.0).contains(&data.heading), "Heading {} not wrapped", data.heading);

    let max_rate = config.limits.max_angular_rate;
    for rate in [data.roll_rate, data.pitch_rate, data.yaw_rate] {
        assert!(rate.abs() <= max_rate + 1e-9, "Angular rate {} above limit", rate);
    }
    assert!(data.pitch.abs() <= config.limits.max_pitch + 1e-9);
    assert!(data.roll.abs() <= config.limits.max_roll + 1e-9);

    assert!((0.0..=1.0).contains(&data.drag_chute_progress));
    assert!((0.0..=1.0).contains(&data.gear_deploy_progress));

    if data.is_grounded && !data.is_crashed {
        assert!(
            data.height_above_terrain >= config.ground.wheel_height - 1e-6,
            "Grounded below wheel height: {}",
            data.height_above_terrain
        );
    }
}

/// Assert that a progress value moved by no more than `max_step` between ticks.
#[track_caller]
pub fn assert_progress_step(before: f64, after: f64, max_step: f64) {
    assert!(
        (after - before).abs() <= max_step + 1e-12,
        "Progress jumped from {} to {}",
        before,
        after
    );
}

/// Assert the heading change between two headings, accounting for wrap-around.
#[track_caller]
pub fn assert_heading_change(before: f64, after: f64, expected: f64, max_relative: f64) {
    let mut delta = after - before;
    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }
    assert_relative_eq!(delta, expected, max_relative = max_relative);
}
