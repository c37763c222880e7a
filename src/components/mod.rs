pub mod aircraft;
pub mod command;
pub mod crash;
pub mod flight_data;

pub use aircraft::*;
pub use command::CommandResult;
pub use crash::{CrashEvent, CrashObserver, CrashReason, ImpactSeverity};
pub use flight_data::FlightData;
