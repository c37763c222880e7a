use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::{
    components::{AircraftSource, ControlInput, FlightState, StartConfig, UavConfig},
    engine::FlightDynamicsEngine,
    resources::{EnvironmentConfig, PhysicsConfig},
    utils::{RngManager, SimError, WithRng},
};

/// Name of the RNG stream feeding stall buffet.
const BUFFET_STREAM: &str = "buffet";

/// Collects the pieces of an engine. Anything left unset falls back to its default.
#[derive(Default, Debug, Clone)]
pub struct EngineBuilder {
    pub config: Option<UavConfig>,
    pub source: Option<AircraftSource>,
    pub physics: Option<PhysicsConfig>,
    pub environment: Option<EnvironmentConfig>,
    pub start: Option<StartConfig>,
    pub seed: Option<u64>,
    pub rng: Option<ChaCha8Rng>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already-built airframe; takes precedence over `with_source`.
    pub fn with_config(mut self, config: UavConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_source(mut self, source: AircraftSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = Some(physics);
        self
    }

    pub fn with_environment(mut self, environment: EnvironmentConfig) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_start(mut self, start: StartConfig) -> Self {
        self.start = Some(start);
        self
    }

    /// Overrides the seed in the physics config.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates every piece and assembles the engine.
    pub fn build(self) -> Result<FlightDynamicsEngine, SimError> {
        let config = match (self.config, self.source) {
            (Some(config), _) => config,
            (None, Some(source)) => UavConfig::new(source)?,
            (None, None) => UavConfig::default(),
        };
        config.validate()?;

        let mut physics = self.physics.unwrap_or_default();
        if let Some(seed) = self.seed {
            physics.seed = Some(seed);
        }
        physics.validate().map_err(SimError::InvalidConfig)?;

        let environment = self.environment.unwrap_or_default();
        environment
            .atmosphere
            .validate()
            .map_err(SimError::InvalidConfig)?;
        if !environment.wind.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "wind must be finite, got {:?}",
                environment.wind
            )));
        }
        if !environment.terrain_height.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "terrain height must be finite, got {}",
                environment.terrain_height
            )));
        }

        let rng = match (self.rng, physics.seed) {
            (Some(rng), _) => rng,
            (None, Some(seed)) => {
                info!("Using master seed {} for stall buffet", seed);
                RngManager::new(seed).stream(BUFFET_STREAM)
            }
            (None, None) => ChaCha8Rng::from_entropy(),
        };

        let start = self.start.unwrap_or_default().within_envelope(&config.limits);
        let mut state = FlightState::from_start(&start, environment.terrain_height);
        state.wind = environment.wind;

        info!(
            "Building flight dynamics engine for {} at {:.1} m",
            config.name, state.position.height
        );

        Ok(FlightDynamicsEngine {
            config,
            physics,
            atmosphere: environment.atmosphere,
            state,
            input: ControlInput::neutral(),
            rng,
            observers: Vec::new(),
            unrestricted: false,
        })
    }
}

impl WithRng for EngineBuilder {
    fn with_rng(mut self, rng: ChaCha8Rng) -> Self {
        self.rng = Some(rng);
        self
    }
}
