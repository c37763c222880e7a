pub mod config;
pub mod environment;

pub use config::{PhysicsConfig, UnrestrictedConfig};
pub use environment::{AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindVector};
