use tracing::warn;

use crate::components::{PowerState, PowerplantConfig};

/// Moves the throttle lever by the rate command and keeps it in [0, 100].
///
/// # Arguments
/// * `throttle_delta` - Rate command in [-1, 1].
pub fn update_throttle(power: &mut PowerState, config: &PowerplantConfig, throttle_delta: f64, dt: f64) {
    power.throttle = (power.throttle + throttle_delta * config.throttle_rate * dt).clamp(0.0, 100.0);
}

/// Propeller efficiency `max(η_min, 1 − V²/V_lim²)`.
pub fn propeller_efficiency(airspeed: f64, config: &PowerplantConfig) -> f64 {
    let limit = config.prop_speed_limit;
    (1.0 - airspeed * airspeed / (limit * limit)).max(config.min_prop_efficiency)
}

/// Thrust the engine is spooling toward: `idle + (max − idle)·ratio·η`.
pub fn target_thrust(throttle_ratio: f64, airspeed: f64, config: &PowerplantConfig) -> f64 {
    let efficiency = propeller_efficiency(airspeed, config);
    config.idle_thrust + (config.max_thrust - config.idle_thrust) * throttle_ratio * efficiency
}

/// First-order spool toward `target`.
///
/// The step fraction is capped at 1 so large `lag·dt` products settle on the
/// target instead of overshooting it.
pub fn spool_thrust(current: f64, target: f64, config: &PowerplantConfig, dt: f64) -> f64 {
    let fraction = (config.thrust_lag * dt).min(1.0);
    current + (target - current) * fraction
}

/// Drains the battery in proportion to throttle. An empty battery forces the
/// throttle to zero; the airframe keeps gliding.
///
/// # Returns
/// `true` on the tick the battery runs out.
pub fn drain_battery(power: &mut PowerState, config: &PowerplantConfig, dt: f64) -> bool {
    let was_charged = power.battery > 0.0;
    power.battery = (power.battery - power.throttle_ratio() * config.throttle_drain * dt).max(0.0);
    if power.battery <= 0.0 {
        power.throttle = 0.0;
        if was_charged {
            warn!("Battery depleted, engine stopped");
            return true;
        }
    }
    false
}
