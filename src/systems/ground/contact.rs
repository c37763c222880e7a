use tracing::info;

use crate::components::{
    AirData, Attitude, CrashReason, GroundContact, ImpactSeverity, LandingGearState, LandingLimits,
};

/// Touchdown checks, run once on the airborne→grounded transition.
///
/// Checks run in a fixed order and the first failure wins: gear, sink rate,
/// bank, then nose and tail clearance.
///
/// # Arguments
/// * `vertical_speed` - Sink rate at contact (m/s, negative is down).
/// * `airspeed` - Airspeed at contact (m/s).
/// * `rotation_speed` - V_R; tail strikes only count below it (m/s).
pub fn touchdown_check(
    attitude: &Attitude,
    vertical_speed: f64,
    airspeed: f64,
    gear: &LandingGearState,
    limits: &LandingLimits,
    rotation_speed: f64,
) -> Option<CrashReason> {
    if !gear.down || gear.progress < limits.min_gear_progress {
        return Some(CrashReason::GearUp {
            gear_down: gear.down,
            progress: gear.progress,
        });
    }

    if vertical_speed < limits.max_vertical_speed {
        let severity = if vertical_speed < limits.hard_impact_vertical_speed {
            ImpactSeverity::HardImpact
        } else {
            ImpactSeverity::HardLanding
        };
        return Some(CrashReason::ExcessiveSinkRate {
            vertical_speed,
            limit: limits.max_vertical_speed,
            severity,
        });
    }

    if attitude.roll.abs() > limits.max_roll {
        return Some(CrashReason::WingtipStrike {
            roll: attitude.roll,
            limit: limits.max_roll,
        });
    }

    if attitude.pitch < limits.nose_gear_max_pitch {
        return Some(CrashReason::NoseStrike {
            pitch: attitude.pitch,
            limit: limits.nose_gear_max_pitch,
        });
    }

    if attitude.pitch > limits.tail_strike_pitch && airspeed < rotation_speed {
        return Some(CrashReason::TailStrike {
            pitch: attitude.pitch,
            limit: limits.tail_strike_pitch,
        });
    }

    None
}

/// Softens climb rate and flight path angle after a good touchdown.
pub fn apply_touchdown_damping(air: &mut AirData, limits: &LandingLimits) {
    info!(
        "Touchdown at {:.1} m/s, sink {:.2} m/s",
        air.airspeed, air.vertical_speed
    );
    air.climb_rate *= limits.touchdown_damping;
    air.flight_path_angle *= limits.touchdown_gamma_damping;
}

/// Terrain penetration outside the touchdown path.
pub fn terrain_impact(height_above_terrain: f64) -> Option<CrashReason> {
    if height_above_terrain < 0.0 {
        Some(CrashReason::UncontrolledTerrainImpact { height_above_terrain })
    } else {
        None
    }
}

/// Refreshes the collision warning flag from the current height above terrain.
pub fn update_collision_warning(ground: &mut GroundContact, limits: &LandingLimits, crashed: bool) {
    ground.collision_warning = !crashed && ground.height_above_terrain < limits.collision_warning_margin;
}
