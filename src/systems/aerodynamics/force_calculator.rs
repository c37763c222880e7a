use crate::components::{DragChuteState, LiftCoefficients, StallState, UavConfig};
use crate::systems::aerodynamics::AirDataCalculation;
use crate::utils::deg_to_rad;

/// Angle of attack past the critical angle at which stall intensity saturates.
const FULL_STALL_EXCESS_DEG: f64 = 10.0;

/// Aerodynamic coefficients and forces for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroForces {
    pub c_l: f64,
    pub c_d: f64,
    /// Lift including ground effect (N).
    pub lift: f64,
    /// Total drag including the chute canopy (N).
    pub drag: f64,
    /// Canopy drag alone (N).
    pub chute_drag: f64,
    pub stall: StallState,
}

/// Lift coefficient with saturation and stall.
///
/// `C_L = C_L0 + C_Lα·α` is first saturated at `±C_Lmax`. Past the critical angle
/// it then decays as `e^(−sharpness·(|α|−α_stall))`. Otherwise, below the speed
/// margin over Vs, it is scaled by `(V / (margin·Vs))²`.
///
/// # Arguments
/// * `alpha` - Angle of attack (radians).
/// * `true_airspeed` - Wind-corrected airspeed (m/s).
/// * `lift` - Lift curve parameters.
/// * `min_airspeed` - Stall speed Vs (m/s).
pub fn lift_coefficient(
    alpha: f64,
    true_airspeed: f64,
    lift: &LiftCoefficients,
    min_airspeed: f64,
) -> (f64, StallState) {
    let linear = lift.c_l_0 + lift.c_l_alpha * alpha;
    let c_l = linear.clamp(-lift.c_l_max, lift.c_l_max);

    let stall_aoa = deg_to_rad(lift.stall_aoa);
    let speed_threshold = min_airspeed * lift.speed_stall_margin;

    if alpha.abs() > stall_aoa {
        let excess = alpha.abs() - stall_aoa;
        let factor = (-lift.stall_sharpness * excess).exp();
        let intensity = (excess / deg_to_rad(FULL_STALL_EXCESS_DEG)).min(1.0);
        (c_l * factor, StallState::stalled(intensity))
    } else if true_airspeed < speed_threshold {
        let ratio = true_airspeed / speed_threshold;
        (c_l * ratio * ratio, StallState::stalled(1.0 - ratio))
    } else {
        (c_l, StallState::clear())
    }
}

/// Lift multiplier within one wingspan of the ground, ramping linearly from
/// 1 at one span to `multiplier` at zero height.
pub fn ground_effect_factor(height_above_terrain: f64, wing_span: f64, multiplier: f64) -> f64 {
    if height_above_terrain > 0.0 && height_above_terrain < wing_span {
        let ratio = 1.0 - height_above_terrain / wing_span;
        1.0 + (multiplier - 1.0) * ratio
    } else {
        1.0
    }
}

/// Drag coefficient added by a partly or fully open canopy.
pub fn chute_drag_coefficient(c_d_0: f64, drag_multiplier: f64, progress: f64) -> f64 {
    c_d_0 * drag_multiplier * progress
}

/// Direct canopy drag force `q·A·Cd·progress`.
pub fn chute_drag_force(dynamic_pressure: f64, area: f64, drag_coefficient: f64, progress: f64) -> f64 {
    dynamic_pressure * area * drag_coefficient * progress
}

/// Computes lift, drag and stall state from the tick's air data.
///
/// # Arguments
/// * `air` - Air data for this tick.
/// * `height_above_terrain` - Height of the reference point above terrain (m).
/// * `chute` - Drag chute state; contributes while its progress is non-zero.
/// * `drag_scale` - Multiplier on total drag (1.0 in normal flight).
pub fn calculate_aero_forces(
    air: &AirDataCalculation,
    height_above_terrain: f64,
    config: &UavConfig,
    chute: &DragChuteState,
    drag_scale: f64,
) -> AeroForces {
    let coeffs = &config.aero_coef;
    let q = air.dynamic_pressure;
    let area = config.geometry.wing_area;

    let (c_l, stall) = lift_coefficient(
        air.alpha,
        air.true_airspeed,
        &coeffs.lift,
        config.limits.min_airspeed,
    );

    let lift = q
        * area
        * c_l
        * ground_effect_factor(
            height_above_terrain,
            config.geometry.wing_span,
            coeffs.lift.ground_effect_multiplier,
        );

    let mut c_d = coeffs.drag.c_d_0 + coeffs.drag.k * c_l * c_l;
    let mut chute_drag = 0.0;
    if chute.progress > 0.0 {
        c_d += chute_drag_coefficient(coeffs.drag.c_d_0, config.chute.drag_multiplier, chute.progress);
        chute_drag = chute_drag_force(q, config.chute.area, config.chute.drag_coefficient, chute.progress);
    }

    AeroForces {
        c_l,
        c_d,
        lift,
        drag: (q * area * c_d + chute_drag) * drag_scale,
        chute_drag,
        stall,
    }
}
