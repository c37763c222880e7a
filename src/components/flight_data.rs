use serde::{Deserialize, Serialize};

use crate::components::aircraft::{ChuteState, FlightState};
use crate::components::CrashReason;
use crate::utils::MS_TO_KMH;

/// Read-only snapshot of everything a HUD, logger or autopilot may observe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightData {
    // Position
    pub longitude: f64,
    pub latitude: f64,
    /// Height above mean sea level (m).
    pub altitude: f64,

    // Orientation (degrees)
    pub heading: f64,
    pub pitch: f64,
    pub roll: f64,
    /// Body rates p, q, r (deg/s).
    pub roll_rate: f64,
    pub pitch_rate: f64,
    pub yaw_rate: f64,

    // Speeds (m/s)
    pub airspeed: f64,
    pub true_airspeed: f64,
    pub ground_speed: f64,
    pub climb_rate: f64,
    pub vertical_speed: f64,
    pub flight_path_angle: f64,
    /// Wind across the heading; positive blows from left to right (m/s).
    pub crosswind: f64,

    // Engine
    pub throttle: f64,
    pub battery: f64,
    pub is_powered: bool,
    pub unrestricted: bool,

    // Aerodynamics
    pub g_force: f64,
    /// True while `g_force` exceeds the structural limit.
    pub is_over_g: bool,
    pub load_factor: f64,
    pub angle_of_attack: f64,
    pub is_stalling: bool,
    pub stall_intensity: f64,
    pub thrust: f64,
    pub lift: f64,
    pub drag: f64,

    // Ground contact
    pub is_grounded: bool,
    pub terrain_height: f64,
    pub height_above_terrain: f64,
    pub is_taxiing: bool,
    pub ground_contact_time: f64,
    pub is_collision_warning: bool,
    pub is_crashed: bool,
    pub crash_reason: Option<CrashReason>,

    // Recovery systems
    pub drag_chute_state: ChuteState,
    pub drag_chute_deployed: bool,
    pub drag_chute_progress: f64,
    pub landing_gear_down: bool,
    pub gear_deploy_progress: f64,

    // Statistics
    pub total_distance: f64,
    pub max_altitude: f64,
    pub max_g: f64,
    pub max_speed: f64,
    pub sim_time: f64,
}

impl FlightData {
    /// Copies the observable fields out of `state`.
    pub fn capture(state: &FlightState, unrestricted: bool) -> Self {
        Self {
            longitude: state.position.longitude,
            latitude: state.position.latitude,
            altitude: state.position.height,
            heading: state.attitude.heading,
            pitch: state.attitude.pitch,
            roll: state.attitude.roll,
            roll_rate: state.rates.p,
            pitch_rate: state.rates.q,
            yaw_rate: state.rates.r,
            airspeed: state.air_data.airspeed,
            true_airspeed: state.air_data.true_airspeed,
            ground_speed: state.air_data.ground_speed,
            climb_rate: state.air_data.climb_rate,
            vertical_speed: state.air_data.vertical_speed,
            flight_path_angle: state.air_data.flight_path_angle,
            crosswind: state.wind.across_heading(state.attitude.heading),
            throttle: state.power.throttle,
            battery: state.power.battery,
            is_powered: state.power.powered,
            unrestricted,
            g_force: state.loads.g_force,
            is_over_g: state.loads.over_g,
            load_factor: state.loads.load_factor,
            angle_of_attack: state.air_data.angle_of_attack,
            is_stalling: state.stall.is_stalling,
            stall_intensity: state.stall.intensity,
            thrust: state.loads.thrust,
            lift: state.loads.lift,
            drag: state.loads.drag,
            is_grounded: state.ground.on_ground,
            terrain_height: state.ground.terrain_height,
            height_above_terrain: state.ground.height_above_terrain,
            is_taxiing: state.ground.is_taxiing,
            ground_contact_time: state.ground.contact_time,
            is_collision_warning: state.ground.collision_warning,
            is_crashed: state.crash.is_some(),
            crash_reason: state.crash.clone(),
            drag_chute_state: state.chute.state,
            drag_chute_deployed: state.chute.is_deployed(),
            drag_chute_progress: state.chute.progress,
            landing_gear_down: state.gear.down,
            gear_deploy_progress: state.gear.progress,
            total_distance: state.stats.total_distance,
            max_altitude: state.stats.max_altitude,
            max_g: state.stats.max_g,
            max_speed: state.stats.max_speed,
            sim_time: state.sim_time,
        }
    }

    pub fn airspeed_kmh(&self) -> f64 {
        self.airspeed * MS_TO_KMH
    }

    pub fn ground_speed_kmh(&self) -> f64 {
        self.ground_speed * MS_TO_KMH
    }

    /// Human-readable crash reason, empty while flying.
    pub fn crash_message(&self) -> String {
        self.crash_reason
            .as_ref()
            .map(|reason| reason.to_string())
            .unwrap_or_default()
    }

    /// Every numeric field, for invariant checks.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 35] {
        [
            ("longitude", self.longitude),
            ("latitude", self.latitude),
            ("altitude", self.altitude),
            ("heading", self.heading),
            ("pitch", self.pitch),
            ("roll", self.roll),
            ("roll_rate", self.roll_rate),
            ("pitch_rate", self.pitch_rate),
            ("yaw_rate", self.yaw_rate),
            ("airspeed", self.airspeed),
            ("true_airspeed", self.true_airspeed),
            ("ground_speed", self.ground_speed),
            ("climb_rate", self.climb_rate),
            ("vertical_speed", self.vertical_speed),
            ("flight_path_angle", self.flight_path_angle),
            ("crosswind", self.crosswind),
            ("throttle", self.throttle),
            ("battery", self.battery),
            ("g_force", self.g_force),
            ("load_factor", self.load_factor),
            ("angle_of_attack", self.angle_of_attack),
            ("stall_intensity", self.stall_intensity),
            ("thrust", self.thrust),
            ("lift", self.lift),
            ("drag", self.drag),
            ("terrain_height", self.terrain_height),
            ("height_above_terrain", self.height_above_terrain),
            ("ground_contact_time", self.ground_contact_time),
            ("drag_chute_progress", self.drag_chute_progress),
            ("gear_deploy_progress", self.gear_deploy_progress),
            ("total_distance", self.total_distance),
            ("max_altitude", self.max_altitude),
            ("max_g", self.max_g),
            ("max_speed", self.max_speed),
            ("sim_time", self.sim_time),
        ]
    }
}
