use std::{
    env,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use uav_flight::{
    AircraftSource, CrashEvent, EngineBuilder, FlightDynamicsEngine, PhysicsConfig, SimError,
    StartConfig, UavConfig,
};

/// Fixed integration step of the scripted flight (s).
const DT: f64 = 0.02;
/// Snapshot every this many ticks.
const SNAPSHOT_EVERY: usize = 25;

/// One leg of the scripted profile: stick inputs held for `duration` seconds.
struct Leg {
    name: &'static str,
    duration: f64,
    pitch: f64,
    roll: f64,
    yaw: f64,
    throttle: f64,
}

const PROFILE: [Leg; 5] = [
    Leg {
        name: "takeoff roll",
        duration: 20.0,
        pitch: 0.0,
        roll: 0.0,
        yaw: 0.0,
        throttle: 1.0,
    },
    Leg {
        name: "rotate and climb",
        duration: 30.0,
        pitch: 0.6,
        roll: 0.0,
        yaw: 0.0,
        throttle: 1.0,
    },
    Leg {
        name: "turn",
        duration: 20.0,
        pitch: 0.2,
        roll: 0.5,
        yaw: 0.0,
        throttle: 0.0,
    },
    Leg {
        name: "level off",
        duration: 20.0,
        pitch: 0.0,
        roll: 0.0,
        yaw: 0.0,
        throttle: -0.5,
    },
    Leg {
        name: "approach",
        duration: 60.0,
        pitch: -0.1,
        roll: 0.0,
        yaw: 0.0,
        throttle: -1.0,
    },
];

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_engine(config_path: Option<PathBuf>) -> Result<FlightDynamicsEngine, SimError> {
    let config = match config_path {
        Some(path) => {
            info!("Loading airframe from {}", path.display());
            UavConfig::new(AircraftSource::File(path))?
        }
        None => UavConfig::predator(),
    };
    let start = StartConfig::on_runway(32.99, 39.93, 938.0, config.ground.wheel_height);

    let mut engine = EngineBuilder::new()
        .with_config(config)
        .with_physics(PhysicsConfig::with_seed(42))
        .with_environment(uav_flight::EnvironmentConfig::default().with_terrain_height(938.0))
        .with_start(start)
        .build()?;
    engine.on_crash(|event: &CrashEvent| warn!("Flight ended at {:.1} s: {}", event.sim_time, event.reason));
    Ok(engine)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging();

    let config_path = env::args().nth(1).map(PathBuf::from);
    let mut engine = build_engine(config_path)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut tick = 0usize;

    'profile: for leg in PROFILE.iter() {
        info!("Leg: {}", leg.name);
        let steps = (leg.duration / DT).round() as usize;
        for _ in 0..steps {
            engine.set_input(leg.pitch, leg.roll, leg.yaw, leg.throttle);
            let crashed = engine.update(DT).is_some();
            if tick % SNAPSHOT_EVERY == 0 || crashed {
                serde_json::to_writer(&mut out, &engine.snapshot())?;
                writeln!(out)?;
            }
            tick += 1;
            if crashed {
                break 'profile;
            }
        }
    }
    out.flush()?;

    let data = engine.snapshot();
    info!(
        "Finished after {:.1} s: {:.0} m flown, max altitude {:.0} m, max {:.2} G",
        data.sim_time, data.total_distance, data.max_altitude, data.max_g
    );
    if data.is_crashed {
        warn!("Crashed: {}", data.crash_message());
    }
    Ok(())
}
