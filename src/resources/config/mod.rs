pub mod physics;

pub use physics::{PhysicsConfig, UnrestrictedConfig};
