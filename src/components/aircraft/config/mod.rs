mod aero_coef;
mod aircraft;
mod authority;
mod envelope;
mod geometry;
mod ground;
mod loader;
mod mass;
mod propulsion;
mod recovery;
mod start;

pub use aero_coef::{AeroCoefficients, DragCoefficients, LiftCoefficients};
pub use aircraft::{AircraftSource, AircraftType, UavConfig};
pub use authority::ControlAuthority;
pub use envelope::FlightEnvelope;
pub use geometry::AircraftGeometry;
pub use ground::{GroundConfig, LandingLimits};
pub use loader::{ConfigError, RawAircraftConfig};
pub use mass::MassModel;
pub use propulsion::PowerplantConfig;
pub use recovery::{DragChuteConfig, LandingGearConfig};
pub use start::StartConfig;
