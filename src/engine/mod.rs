mod builder;
mod update;

pub use builder::EngineBuilder;

use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::{error, info, warn};

use crate::{
    components::{
        CommandResult, ControlInput, CrashEvent, CrashObserver, CrashReason, FlightData,
        FlightState, StartConfig, UavConfig,
    },
    resources::{AtmosphereConfig, PhysicsConfig, WindVector},
    systems::{
        aerodynamics::true_airspeed, chute, controls::shape_input, gear,
        ground::{terrain_impact, update_collision_warning},
    },
    utils::{SimError, WithRng},
};

/// Owns one simulated airframe and advances it frame by frame.
///
/// All state changes go through `update` and the setters below. Callers only ever
/// see [`FlightData`] copies, never the live [`FlightState`] mutably.
pub struct FlightDynamicsEngine {
    config: UavConfig,
    physics: PhysicsConfig,
    atmosphere: AtmosphereConfig,
    state: FlightState,
    input: ControlInput,
    rng: ChaCha8Rng,
    observers: Vec<Box<dyn CrashObserver>>,
    unrestricted: bool,
}

impl FlightDynamicsEngine {
    /// Engine for `config` at `start` with default physics and a calm sea-level environment.
    pub fn new(config: UavConfig, start: StartConfig) -> Result<Self, SimError> {
        EngineBuilder::new().with_config(config).with_start(start).build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn config(&self) -> &UavConfig {
        &self.config
    }

    pub fn physics(&self) -> &PhysicsConfig {
        &self.physics
    }

    pub fn atmosphere(&self) -> &AtmosphereConfig {
        &self.atmosphere
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Shaped input applied on the next `update`.
    pub fn input(&self) -> &ControlInput {
        &self.input
    }

    pub fn is_unrestricted(&self) -> bool {
        self.unrestricted
    }

    pub fn is_crashed(&self) -> bool {
        self.state.is_crashed()
    }

    /// Immutable copy of every observable quantity.
    pub fn snapshot(&self) -> FlightData {
        FlightData::capture(&self.state, self.unrestricted)
    }

    /// Stores shaped stick inputs for the next tick.
    ///
    /// # Arguments
    /// * `pitch`, `roll`, `yaw` - Raw axis values in [-1, 1].
    /// * `throttle` - Throttle rate command in [-1, 1].
    pub fn set_input(&mut self, pitch: f64, roll: f64, yaw: f64, throttle: f64) {
        if ![pitch, roll, yaw, throttle].iter().all(|v| v.is_finite()) {
            warn!(
                "Non-finite control input (pitch {}, roll {}, yaw {}, throttle {}) treated as centred",
                pitch, roll, yaw, throttle
            );
        }
        self.input = shape_input(pitch, roll, yaw, throttle);
    }

    /// Replaces the wind and refreshes the true airspeed against it.
    pub fn set_wind(&mut self, wind: WindVector) {
        if !wind.is_finite() {
            warn!("Ignoring non-finite wind {:?}", wind);
            return;
        }
        self.state.wind = wind;
        self.state.air_data.true_airspeed = true_airspeed(
            self.state.air_data.airspeed,
            self.state.attitude.heading,
            &wind,
        );
    }

    /// Updates the terrain elevation under the aircraft.
    ///
    /// A grounded aircraft is re-seated on its wheels. An airborne one that ends
    /// up below the new surface crashes.
    ///
    /// # Returns
    /// The crash event if the new terrain put the aircraft underground.
    pub fn set_terrain_height(&mut self, terrain_height: f64) -> Option<CrashEvent> {
        if !terrain_height.is_finite() {
            warn!("Ignoring non-finite terrain height {}", terrain_height);
            return None;
        }
        self.state.ground.terrain_height = terrain_height;
        if self.state.ground.on_ground && !self.state.is_crashed() {
            self.state.position.height = terrain_height + self.config.ground.wheel_height;
        }
        self.state.refresh_height_above_terrain();
        let crashed = self.state.is_crashed();
        update_collision_warning(&mut self.state.ground, &self.config.landing, crashed);
        self.check_terrain_collision()
    }

    /// Crashes the aircraft if its reference point is below the terrain.
    pub fn check_terrain_collision(&mut self) -> Option<CrashEvent> {
        if self.state.is_crashed() {
            return None;
        }
        self.state.refresh_height_above_terrain();
        terrain_impact(self.state.ground.height_above_terrain).and_then(|reason| self.crash(reason))
    }

    pub fn toggle_drag_chute(&mut self) -> CommandResult {
        if self.state.is_crashed() {
            return CommandResult::rejected("Aircraft has crashed");
        }
        chute::toggle_drag_chute(&mut self.state.chute, &self.state.ground, &self.config.chute)
    }

    /// Arms the drag chute to open once grounded or low enough.
    pub fn request_drag_chute(&mut self) -> CommandResult {
        if self.state.is_crashed() {
            return CommandResult::rejected("Aircraft has crashed");
        }
        chute::request_drag_chute(&mut self.state.chute, &self.state.ground, &self.config.chute)
    }

    pub fn toggle_landing_gear(&mut self) -> CommandResult {
        if self.state.is_crashed() {
            return CommandResult::rejected("Aircraft has crashed");
        }
        gear::toggle_landing_gear(&mut self.state.gear, self.state.ground.on_ground)
    }

    pub fn is_powered(&self) -> bool {
        self.state.power.powered
    }

    /// Master power switch. `update` does nothing while off.
    pub fn set_powered(&mut self, powered: bool) {
        if self.state.is_crashed() && powered {
            warn!("Cannot power up a crashed aircraft, reset first");
            return;
        }
        if self.state.power.powered != powered {
            info!("Engine power {}", if powered { "on" } else { "off" });
        }
        self.state.power.powered = powered;
    }

    /// Switches the out-of-envelope test mode.
    ///
    /// Enabling fails unless the physics config explicitly allows it.
    pub fn set_unrestricted(&mut self, enabled: bool) -> Result<(), SimError> {
        if enabled && !self.physics.allow_unrestricted {
            return Err(SimError::UnrestrictedModeDisabled);
        }
        if self.unrestricted != enabled {
            info!(
                "Unrestricted mode {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
        self.unrestricted = enabled;
        Ok(())
    }

    /// Starts a fresh flight at `start`, clearing any crash.
    ///
    /// Config, observers, wind, terrain and the RNG stream are kept.
    pub fn reset(&mut self, start: StartConfig) {
        let wind = self.state.wind;
        let terrain_height = self.state.ground.terrain_height;
        let start = start.within_envelope(&self.config.limits);
        self.state = FlightState::from_start(&start, terrain_height);
        self.state.wind = wind;
        self.input = ControlInput::neutral();
        info!(
            "Engine reset at ({:.5}, {:.5}), {:.1} m",
            self.state.position.longitude, self.state.position.latitude, self.state.position.height
        );
    }

    /// Registers an observer called once per crash transition.
    pub fn on_crash<O>(&mut self, observer: O)
    where
        O: CrashObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Enters the terminal crashed state. Fires at most once per flight.
    pub(crate) fn crash(&mut self, reason: CrashReason) -> Option<CrashEvent> {
        if self.state.is_crashed() {
            return None;
        }
        error!("CRASH: {} [{}]", reason, reason.code());

        let state = &mut self.state;
        state.power.throttle = 0.0;
        state.power.powered = false;
        state.air_data.airspeed = 0.0;
        state.air_data.true_airspeed = 0.0;
        state.air_data.climb_rate = 0.0;
        state.air_data.ground_speed = 0.0;
        state.loads.thrust = 0.0;
        state.ground.collision_warning = false;
        state.crash = Some(reason.clone());

        let event = CrashEvent::new(reason, state.sim_time);
        for observer in self.observers.iter_mut() {
            observer.on_crash(&event);
        }
        Some(event)
    }
}

impl WithRng for FlightDynamicsEngine {
    fn with_rng(mut self, rng: ChaCha8Rng) -> Self {
        self.rng = rng;
        self
    }
}

impl fmt::Debug for FlightDynamicsEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightDynamicsEngine")
            .field("config", &self.config.name)
            .field("state", &self.state)
            .field("input", &self.input)
            .field("unrestricted", &self.unrestricted)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::{Arc, Mutex};

    fn engine() -> FlightDynamicsEngine {
        EngineBuilder::new()
            .with_seed(3)
            .with_start(StartConfig::at_position(0.0, 0.0, 500.0))
            .build()
            .unwrap()
    }

    #[test]
    fn test_set_input_shapes_and_sanitises() {
        let mut engine = engine();
        engine.set_input(1.0, f64::NAN, 0.02, 5.0);
        let input = engine.input();
        assert_relative_eq!(input.pitch, 1.0);
        assert_eq!(input.roll, 0.0);
        assert_eq!(input.yaw, 0.0);
        assert_eq!(input.throttle, 1.0);
    }

    #[test]
    fn test_non_finite_wind_ignored() {
        let mut engine = engine();
        engine.set_wind(WindVector::new(3.0, 4.0));
        engine.set_wind(WindVector::new(f64::INFINITY, 0.0));
        assert_eq!(engine.state().wind, WindVector::new(3.0, 4.0));
    }

    #[test]
    fn test_headwind_raises_true_airspeed() {
        let mut engine = engine();
        // heading north, wind blowing south
        engine.set_wind(WindVector::new(0.0, -5.0));
        assert_eq!(engine.state().air_data.true_airspeed, 40.0);
    }

    #[test]
    fn test_terrain_above_aircraft_crashes_once() {
        let mut engine = engine();
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        engine.on_crash(move |_: &CrashEvent| *counter.lock().unwrap() += 1);

        let event = engine.set_terrain_height(600.0).expect("crash");
        assert_eq!(event.reason.code(), "terrain_impact");
        assert!(engine.set_terrain_height(700.0).is_none());
        assert!(engine.check_terrain_collision().is_none());
        assert_eq!(*calls.lock().unwrap(), 1);
        assert!(!engine.is_powered());
    }

    #[test]
    fn test_collision_warning_from_terrain() {
        let mut engine = engine();
        assert!(engine.set_terrain_height(490.0).is_none());
        assert!(engine.snapshot().is_collision_warning);
        engine.set_terrain_height(0.0);
        assert!(!engine.snapshot().is_collision_warning);
    }

    #[test]
    fn test_unrestricted_is_gated() {
        let mut engine = engine();
        assert!(matches!(
            engine.set_unrestricted(true),
            Err(SimError::UnrestrictedModeDisabled)
        ));
        assert!(!engine.is_unrestricted());
        assert!(engine.set_unrestricted(false).is_ok());
    }

    #[test]
    fn test_commands_rejected_after_crash() {
        let mut engine = engine();
        engine.set_terrain_height(600.0);
        assert!(!engine.toggle_landing_gear().applied);
        assert!(!engine.toggle_drag_chute().applied);
        assert!(!engine.request_drag_chute().applied);
    }

    #[test]
    fn test_reset_clears_crash() {
        let mut engine = engine();
        engine.set_terrain_height(600.0);
        assert!(engine.is_crashed());
        engine.reset(StartConfig::at_position(0.0, 0.0, 900.0));
        assert!(!engine.is_crashed());
        assert!(engine.is_powered());
        assert_eq!(engine.state().ground.terrain_height, 600.0);
        assert_eq!(engine.snapshot().altitude, 900.0);
    }
}
