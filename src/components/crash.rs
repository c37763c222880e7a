use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How hard an over-limit sink rate hit the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactSeverity {
    /// Sink rate past the safe-landing limit.
    HardLanding,
    /// Sink rate past the stricter hard-impact limit.
    HardImpact,
}

/// Why a flight ended. Every variant is terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CrashReason {
    /// Touched down with the gear retracted or still in transit.
    GearUp { gear_down: bool, progress: f64 },
    /// Touched down sinking faster than the landing limit (m/s, negative is down).
    ExcessiveSinkRate {
        vertical_speed: f64,
        limit: f64,
        severity: ImpactSeverity,
    },
    /// Touched down with too much bank (degrees).
    WingtipStrike { roll: f64, limit: f64 },
    /// Touched down too far nose-down (degrees).
    NoseStrike { pitch: f64, limit: f64 },
    /// Touched down too far nose-up before rotation speed (degrees).
    TailStrike { pitch: f64, limit: f64 },
    /// Found below the terrain surface outside the touchdown path.
    UncontrolledTerrainImpact { height_above_terrain: f64 },
}

impl CrashReason {
    /// Short machine-friendly tag, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            CrashReason::GearUp { .. } => "gear_up",
            CrashReason::ExcessiveSinkRate {
                severity: ImpactSeverity::HardImpact,
                ..
            } => "hard_impact",
            CrashReason::ExcessiveSinkRate { .. } => "hard_landing",
            CrashReason::WingtipStrike { .. } => "wingtip_strike",
            CrashReason::NoseStrike { .. } => "nose_strike",
            CrashReason::TailStrike { .. } => "tail_strike",
            CrashReason::UncontrolledTerrainImpact { .. } => "terrain_impact",
        }
    }
}

impl fmt::Display for CrashReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrashReason::GearUp { gear_down, progress } => {
                if *gear_down {
                    write!(
                        f,
                        "Landing gear not fully extended ({:.0}%), belly landing",
                        progress * 100.0
                    )
                } else {
                    write!(f, "Landing gear retracted, belly landing")
                }
            }
            CrashReason::ExcessiveSinkRate {
                vertical_speed,
                limit,
                severity,
            } => match severity {
                ImpactSeverity::HardImpact => {
                    write!(f, "Hard impact, vertical speed {:.1} m/s", vertical_speed)
                }
                ImpactSeverity::HardLanding => write!(
                    f,
                    "Excessive sink rate {:.1} m/s (limit {:.1} m/s)",
                    vertical_speed, limit
                ),
            },
            CrashReason::WingtipStrike { roll, limit } => write!(
                f,
                "Wingtip strike, roll {:.1}° (limit ±{:.1}°)",
                roll, limit
            ),
            CrashReason::NoseStrike { pitch, limit } => write!(
                f,
                "Nose gear collapse, pitch {:.1}° (limit {:.1}°)",
                pitch, limit
            ),
            CrashReason::TailStrike { pitch, limit } => write!(
                f,
                "Tail strike, pitch {:.1}° (limit {:.1}° below rotation speed)",
                pitch, limit
            ),
            CrashReason::UncontrolledTerrainImpact { .. } => {
                write!(f, "Uncontrolled terrain impact")
            }
        }
    }
}

/// Published exactly once when a flight ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrashEvent {
    pub reason: CrashReason,
    /// Simulated seconds since the engine was created or last reset.
    pub sim_time: f64,
    /// Wall-clock time of the transition.
    pub occurred_at: DateTime<Utc>,
}

impl CrashEvent {
    pub fn new(reason: CrashReason, sim_time: f64) -> Self {
        Self {
            reason,
            sim_time,
            occurred_at: Utc::now(),
        }
    }
}

/// Receives crash notifications from the engine.
///
/// Any `FnMut(&CrashEvent) + Send` closure is an observer.
pub trait CrashObserver: Send {
    fn on_crash(&mut self, event: &CrashEvent);
}

impl<F> CrashObserver for F
where
    F: FnMut(&CrashEvent) + Send,
{
    fn on_crash(&mut self, event: &CrashEvent) {
        self(event)
    }
}
