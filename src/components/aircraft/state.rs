use serde::{Deserialize, Serialize};

use crate::components::aircraft::config::StartConfig;
use crate::components::aircraft::AirData;
use crate::components::CrashReason;
use crate::resources::WindVector;
use crate::utils::GROUND_CONTACT_EPSILON;

/// Geodetic position of the aircraft reference point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Longitude (degrees).
    pub longitude: f64,
    /// Latitude (degrees).
    pub latitude: f64,
    /// Height above mean sea level (m).
    pub height: f64,
}

/// Euler attitude in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attitude {
    /// 0 = north, 90 = east, wrapped to [0, 360).
    pub heading: f64,
    /// Positive nose up.
    pub pitch: f64,
    /// Positive right wing down.
    pub roll: f64,
}

/// Body angular rates (deg/s). These carry the rotational inertia of the airframe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyRates {
    pub p: f64,
    pub q: f64,
    pub r: f64,
}

/// Forces and loads computed during the last tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroLoads {
    /// Current (spooled) thrust (N).
    pub thrust: f64,
    /// Lift including ground effect (N).
    pub lift: f64,
    /// Total drag including the drag chute (N).
    pub drag: f64,
    /// Lift over weight.
    pub load_factor: f64,
    /// Resultant acceleration in G.
    pub g_force: f64,
    /// Set while `g_force` is above the structural limit.
    pub over_g: bool,
}

impl Default for AeroLoads {
    fn default() -> Self {
        Self {
            thrust: 0.0,
            lift: 0.0,
            drag: 0.0,
            load_factor: 1.0,
            g_force: 1.0,
            over_g: false,
        }
    }
}

/// Stall flag and how deep into the stall the wing is, in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StallState {
    pub is_stalling: bool,
    pub intensity: f64,
}

impl StallState {
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn stalled(intensity: f64) -> Self {
        Self {
            is_stalling: true,
            intensity: intensity.clamp(0.0, 1.0),
        }
    }
}

/// Throttle lever, energy reserve and master switch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerState {
    /// Throttle (%), in [0, 100].
    pub throttle: f64,
    /// Battery or fuel remaining (%), in [0, 100].
    pub battery: f64,
    /// When false `update` does nothing.
    pub powered: bool,
}

impl PowerState {
    pub fn throttle_ratio(&self) -> f64 {
        self.throttle / 100.0
    }
}

/// Wheel contact bookkeeping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundContact {
    /// Wheels on the surface this tick.
    pub on_ground: bool,
    /// Terrain elevation under the aircraft (m AMSL).
    pub terrain_height: f64,
    /// Height of the reference point above the terrain (m).
    pub height_above_terrain: f64,
    /// Rolling along the ground above walking pace.
    pub is_taxiing: bool,
    /// Seconds since the last touchdown.
    pub contact_time: f64,
    /// Height above terrain is inside the warning margin.
    pub collision_warning: bool,
}

impl GroundContact {
    /// Wheels are in contact when the reference point is no higher than the wheel height.
    pub fn wheels_in_contact(height_above_terrain: f64, wheel_height: f64) -> bool {
        height_above_terrain <= wheel_height + GROUND_CONTACT_EPSILON
    }
}

/// Discrete phase of the ground contact state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactPhase {
    Airborne,
    Grounded,
    /// Terminal until an explicit reset.
    Crashed,
}

/// Drag chute lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChuteState {
    Stowed,
    /// Requested, waiting to be low enough to open.
    Armed,
    Deploying,
    Deployed,
    /// Collapsing after the aircraft slowed down.
    Retracting,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragChuteState {
    pub state: ChuteState,
    /// Opening progress in [0, 1].
    pub progress: f64,
}

impl DragChuteState {
    pub fn is_deployed(&self) -> bool {
        matches!(self.state, ChuteState::Deploying | ChuteState::Deployed)
    }
}

impl Default for DragChuteState {
    fn default() -> Self {
        Self {
            state: ChuteState::Stowed,
            progress: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingGearState {
    /// Target position: true = extended.
    pub down: bool,
    /// Extension progress in [0, 1], 1 = fully down.
    pub progress: f64,
}

impl LandingGearState {
    pub fn new(down: bool) -> Self {
        Self {
            down,
            progress: if down { 1.0 } else { 0.0 },
        }
    }
}

impl Default for LandingGearState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Cumulative figures over the whole flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightStatistics {
    /// Distance flown over the ground (m).
    pub total_distance: f64,
    /// Highest altitude reached (m AMSL).
    pub max_altitude: f64,
    pub max_g: f64,
    /// Highest airspeed reached (m/s).
    pub max_speed: f64,
}

/// Complete mutable state of one simulated airframe.
///
/// Owned exclusively by [`FlightDynamicsEngine`](crate::engine::FlightDynamicsEngine);
/// callers only ever see [`FlightData`](crate::components::FlightData) copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    pub position: GeoPosition,
    pub attitude: Attitude,
    pub rates: BodyRates,
    pub air_data: AirData,
    pub loads: AeroLoads,
    pub stall: StallState,
    pub power: PowerState,
    pub ground: GroundContact,
    pub chute: DragChuteState,
    pub gear: LandingGearState,
    pub wind: WindVector,
    pub crash: Option<CrashReason>,
    pub stats: FlightStatistics,
    /// Simulated seconds since construction or the last reset.
    pub sim_time: f64,
}

impl FlightState {
    /// Builds the initial state for a flight starting at `start`.
    ///
    /// Wheel contact is established by the first `update`, so a start at or below
    /// wheel height goes through the touchdown checks on the first tick.
    pub fn from_start(start: &StartConfig, terrain_height: f64) -> Self {
        let start = start.sanitized();
        Self {
            position: GeoPosition {
                longitude: start.longitude,
                latitude: start.latitude,
                height: start.height,
            },
            attitude: Attitude {
                heading: crate::utils::wrap_heading(start.heading),
                pitch: start.pitch,
                roll: start.roll,
            },
            rates: BodyRates::default(),
            air_data: AirData::at_airspeed(start.airspeed),
            loads: AeroLoads::default(),
            stall: StallState::clear(),
            power: PowerState {
                throttle: start.throttle,
                battery: start.battery,
                powered: true,
            },
            ground: GroundContact {
                terrain_height,
                height_above_terrain: start.height - terrain_height,
                ..Default::default()
            },
            chute: DragChuteState::default(),
            gear: LandingGearState::new(start.landing_gear_down),
            wind: WindVector::calm(),
            crash: None,
            stats: FlightStatistics {
                total_distance: 0.0,
                max_altitude: start.height,
                max_g: 1.0,
                max_speed: start.airspeed,
            },
            sim_time: 0.0,
        }
    }

    pub fn phase(&self) -> ContactPhase {
        if self.crash.is_some() {
            ContactPhase::Crashed
        } else if self.ground.on_ground {
            ContactPhase::Grounded
        } else {
            ContactPhase::Airborne
        }
    }

    pub fn is_crashed(&self) -> bool {
        self.crash.is_some()
    }

    /// Refreshes the height above terrain from the current height.
    pub fn refresh_height_above_terrain(&mut self) {
        self.ground.height_above_terrain = self.position.height - self.ground.terrain_height;
    }
}

impl Default for FlightState {
    fn default() -> Self {
        Self::from_start(&StartConfig::default(), 0.0)
    }
}
