pub mod components;
pub mod engine;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{
    AircraftSource, AircraftType, CommandResult, CrashEvent, CrashObserver, CrashReason,
    FlightData, StartConfig, UavConfig,
};
pub use engine::{EngineBuilder, FlightDynamicsEngine};
pub use resources::{AtmosphereConfig, EnvironmentConfig, PhysicsConfig, WindVector};
pub use utils::{RngManager, SimError, WithRng};
