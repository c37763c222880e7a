use tracing::info;

use crate::components::{ChuteState, CommandResult, DragChuteConfig, DragChuteState, GroundContact};
use crate::utils::approach;

/// Whether the canopy may open at the current height.
pub fn deployment_permitted(ground: &GroundContact, config: &DragChuteConfig) -> bool {
    ground.on_ground || ground.height_above_terrain <= config.max_altitude
}

/// Pilot toggle.
///
/// An open (or opening) canopy is jettisoned at once. Otherwise the chute starts
/// opening if low enough; too high is a rejection that leaves the state untouched.
pub fn toggle_drag_chute(
    chute: &mut DragChuteState,
    ground: &GroundContact,
    config: &DragChuteConfig,
) -> CommandResult {
    if chute.is_deployed() {
        chute.state = ChuteState::Stowed;
        chute.progress = 0.0;
        info!("Drag chute jettisoned");
        return CommandResult::applied("Drag chute jettisoned");
    }

    if chute.state == ChuteState::Armed {
        chute.state = ChuteState::Stowed;
        info!("Drag chute request cancelled");
        return CommandResult::applied("Drag chute request cancelled");
    }

    if !deployment_permitted(ground, config) {
        return CommandResult::rejected(format!(
            "Too high to deploy drag chute: {:.0} m above terrain (max {:.0} m)",
            ground.height_above_terrain, config.max_altitude
        ));
    }

    chute.state = ChuteState::Deploying;
    info!("Drag chute deploying");
    CommandResult::applied("Drag chute deploying")
}

/// Arms a deployment that opens by itself once grounded or below the height limit.
pub fn request_drag_chute(
    chute: &mut DragChuteState,
    ground: &GroundContact,
    config: &DragChuteConfig,
) -> CommandResult {
    match chute.state {
        ChuteState::Deploying | ChuteState::Deployed => {
            CommandResult::rejected("Drag chute already deployed")
        }
        ChuteState::Armed => CommandResult::applied("Drag chute already armed"),
        ChuteState::Stowed | ChuteState::Retracting => {
            if deployment_permitted(ground, config) {
                chute.state = ChuteState::Deploying;
                info!("Drag chute deploying");
                CommandResult::applied("Drag chute deploying")
            } else {
                chute.state = ChuteState::Armed;
                info!(
                    "Drag chute armed, opens below {:.0} m above terrain",
                    config.max_altitude
                );
                CommandResult::applied("Drag chute armed")
            }
        }
    }
}

/// Advances the chute state machine by one tick.
///
/// # Arguments
/// * `airspeed` - Current airspeed; below the chute's minimum the canopy collapses (m/s).
pub fn update_drag_chute(
    chute: &mut DragChuteState,
    ground: &GroundContact,
    airspeed: f64,
    config: &DragChuteConfig,
    dt: f64,
) {
    if chute.state == ChuteState::Armed && deployment_permitted(ground, config) {
        chute.state = ChuteState::Deploying;
        info!("Armed drag chute deploying");
    }

    if chute.is_deployed() && chute.progress > 0.0 && airspeed < config.min_speed {
        chute.state = ChuteState::Retracting;
        info!("Drag chute retracting at {:.1} m/s", airspeed);
    }

    match chute.state {
        ChuteState::Deploying => {
            chute.progress = approach(chute.progress, 1.0, config.deploy_speed * dt);
            if chute.progress >= 1.0 {
                chute.state = ChuteState::Deployed;
            }
        }
        ChuteState::Deployed => chute.progress = 1.0,
        ChuteState::Retracting | ChuteState::Stowed | ChuteState::Armed => {
            chute.progress = approach(chute.progress, 0.0, 2.0 * config.deploy_speed * dt);
            if chute.state == ChuteState::Retracting && chute.progress <= 0.0 {
                chute.state = ChuteState::Stowed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn airborne_at(height_above_terrain: f64) -> GroundContact {
        GroundContact {
            height_above_terrain,
            ..Default::default()
        }
    }

    fn grounded() -> GroundContact {
        GroundContact {
            on_ground: true,
            height_above_terrain: 1.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_toggle_rejected_when_high() {
        let config = DragChuteConfig::default();
        let mut chute = DragChuteState::default();
        let result = toggle_drag_chute(&mut chute, &airborne_at(500.0), &config);
        assert!(!result.applied);
        assert_eq!(chute, DragChuteState::default());
    }

    #[test]
    fn test_toggle_deploys_low_and_progress_rises() {
        let config = DragChuteConfig::default();
        let mut chute = DragChuteState::default();
        assert!(toggle_drag_chute(&mut chute, &airborne_at(10.0), &config).applied);
        assert_eq!(chute.state, ChuteState::Deploying);

        update_drag_chute(&mut chute, &airborne_at(10.0), 30.0, &config, 0.5);
        assert_relative_eq!(chute.progress, 0.4);
        for _ in 0..10 {
            update_drag_chute(&mut chute, &grounded(), 30.0, &config, 0.5);
        }
        assert_eq!(chute.state, ChuteState::Deployed);
        assert_relative_eq!(chute.progress, 1.0);
    }

    #[test]
    fn test_toggle_jettisons() {
        let config = DragChuteConfig::default();
        let mut chute = DragChuteState {
            state: ChuteState::Deployed,
            progress: 1.0,
        };
        let result = toggle_drag_chute(&mut chute, &airborne_at(500.0), &config);
        assert!(result.applied);
        assert_eq!(chute, DragChuteState::default());
    }

    #[test]
    fn test_request_is_deferred_until_low() {
        let config = DragChuteConfig::default();
        let mut chute = DragChuteState::default();
        assert!(request_drag_chute(&mut chute, &airborne_at(300.0), &config).applied);
        assert_eq!(chute.state, ChuteState::Armed);

        update_drag_chute(&mut chute, &airborne_at(100.0), 30.0, &config, 0.05);
        assert_eq!(chute.state, ChuteState::Armed);
        assert_relative_eq!(chute.progress, 0.0);

        update_drag_chute(&mut chute, &airborne_at(12.0), 30.0, &config, 0.05);
        assert_eq!(chute.state, ChuteState::Deploying);
        assert!(chute.progress > 0.0);
    }

    #[test]
    fn test_slow_chute_retracts_at_double_rate() {
        let config = DragChuteConfig::default();
        let mut chute = DragChuteState {
            state: ChuteState::Deployed,
            progress: 1.0,
        };
        update_drag_chute(&mut chute, &grounded(), 1.0, &config, 0.25);
        assert_eq!(chute.state, ChuteState::Retracting);
        assert_relative_eq!(chute.progress, 0.6);

        update_drag_chute(&mut chute, &grounded(), 1.0, &config, 0.5);
        assert_eq!(chute.state, ChuteState::Stowed);
        assert_relative_eq!(chute.progress, 0.0);
    }
}
