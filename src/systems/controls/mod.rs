pub mod shaper;

pub use shaper::{clamp_throttle_delta, shape_axis, shape_input};
