use serde::{Deserialize, Serialize};

/// Shaped pilot commands consumed by the next `update`.
///
/// `pitch`, `roll` and `yaw` are deflections in [-1, 1] after the input curve.
/// `throttle` is a rate-of-change command in [-1, 1], not a lever position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub throttle: f64,
}

impl ControlInput {
    pub fn neutral() -> Self {
        Self::default()
    }
}
