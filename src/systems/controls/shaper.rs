use crate::components::ControlInput;

/// Raw inputs smaller than this are stick jitter.
pub const DEADZONE: f64 = 0.04;
/// Linear share of the response curve.
const LINEAR_GAIN: f64 = 0.3;
/// Cubic share of the response curve.
const CUBIC_GAIN: f64 = 0.7;

/// Maps a raw axis value to a shaped deflection.
///
/// Below the deadzone the result is 0. Above it the remaining travel is rescaled
/// to [0, 1] and passed through `sign(x)·(0.3·x + 0.7·x³)`. Non-finite input
/// is treated as centred.
pub fn shape_axis(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    let raw = raw.clamp(-1.0, 1.0);
    if raw.abs() < DEADZONE {
        return 0.0;
    }
    let normalized = (raw.abs() - DEADZONE) / (1.0 - DEADZONE);
    raw.signum() * (LINEAR_GAIN * normalized + CUBIC_GAIN * normalized.powi(3))
}

/// Throttle is a rate command, so it is clamped but not shaped.
pub fn clamp_throttle_delta(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}

/// Shapes a full set of raw stick inputs.
pub fn shape_input(pitch: f64, roll: f64, yaw: f64, throttle: f64) -> ControlInput {
    ControlInput {
        pitch: shape_axis(pitch),
        roll: shape_axis(roll),
        yaw: shape_axis(yaw),
        throttle: clamp_throttle_delta(throttle),
    }
}
