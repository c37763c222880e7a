pub mod air_data;
pub mod config;
pub mod controls;
pub mod state;

pub use air_data::AirData;
pub use config::{
    AeroCoefficients, AircraftGeometry, AircraftSource, AircraftType, ConfigError,
    ControlAuthority, DragChuteConfig, DragCoefficients, FlightEnvelope, GroundConfig,
    LandingGearConfig, LandingLimits, LiftCoefficients, MassModel, PowerplantConfig,
    RawAircraftConfig, StartConfig, UavConfig,
};
pub use controls::ControlInput;
pub use state::{
    AeroLoads, Attitude, BodyRates, ChuteState, ContactPhase, DragChuteState, FlightState,
    FlightStatistics, GeoPosition, GroundContact, LandingGearState, PowerState, StallState,
};
