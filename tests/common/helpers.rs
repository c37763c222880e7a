use uav_flight::{CrashEvent, FlightData, FlightDynamicsEngine};

use super::DT;

/// Holds the given stick inputs for `steps` ticks of `DT`.
///
/// # Returns
/// The first crash event raised, if any.
pub fn fly(
    engine: &mut FlightDynamicsEngine,
    inputs: (f64, f64, f64, f64),
    steps: usize,
) -> Option<CrashEvent> {
    let (pitch, roll, yaw, throttle) = inputs;
    let mut crash = None;
    for _ in 0..steps {
        engine.set_input(pitch, roll, yaw, throttle);
        if let Some(event) = engine.update(DT) {
            crash.get_or_insert(event);
        }
    }
    crash
}

/// Helper to run a simulation for a specific duration with neutral controls.
pub fn simulate_duration(engine: &mut FlightDynamicsEngine, duration: f64) -> Option<CrashEvent> {
    let steps = (duration / DT).ceil() as usize;
    fly(engine, neutral_controls(), steps)
}

/// Ticks until `condition` holds on the snapshot, or `max_steps` elapse.
pub fn wait_for_condition<F>(
    engine: &mut FlightDynamicsEngine,
    inputs: (f64, f64, f64, f64),
    condition: F,
    max_steps: usize,
) -> Option<FlightData>
where
    F: Fn(&FlightData) -> bool,
{
    for _ in 0..max_steps {
        let data = engine.snapshot();
        if condition(&data) {
            return Some(data);
        }
        engine.set_input(inputs.0, inputs.1, inputs.2, inputs.3);
        engine.update(DT);
    }
    let data = engine.snapshot();
    condition(&data).then_some(data)
}

pub fn neutral_controls() -> (f64, f64, f64, f64) {
    (0.0, 0.0, 0.0, 0.0)
}
