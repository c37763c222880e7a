use tracing::info;

use crate::components::{CommandResult, LandingGearConfig, LandingGearState};
use crate::utils::approach;

/// Flips the gear target. Retraction is refused with the weight on the wheels.
pub fn toggle_landing_gear(gear: &mut LandingGearState, on_ground: bool) -> CommandResult {
    if on_ground && gear.down {
        return CommandResult::rejected("Cannot retract landing gear on the ground");
    }
    gear.down = !gear.down;
    if gear.down {
        info!("Landing gear extending");
        CommandResult::applied("Landing gear extending")
    } else {
        info!("Landing gear retracting");
        CommandResult::applied("Landing gear retracting")
    }
}

/// Moves gear progress toward its target over the configured deploy time.
pub fn advance_landing_gear(gear: &mut LandingGearState, config: &LandingGearConfig, dt: f64) {
    let target = if gear.down { 1.0 } else { 0.0 };
    gear.progress = approach(gear.progress, target, dt / config.deploy_time);
}
