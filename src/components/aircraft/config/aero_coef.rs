use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AeroCoefficients {
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
}

/// Lift curve: `C_L = C_L0 + C_Lα·α`, saturated at `±C_Lmax`, with post-stall decay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftCoefficients {
    /// Lift coefficient at zero angle of attack.
    pub c_l_0: f64,
    /// Lift curve slope (per radian).
    pub c_l_alpha: f64,
    /// Maximum lift coefficient magnitude.
    pub c_l_max: f64,
    /// Critical angle of attack where flow separation begins (degrees).
    pub stall_aoa: f64,
    /// Exponential decay rate of `C_L` past the critical angle (per radian).
    pub stall_sharpness: f64,
    /// Trimmed angle of attack in straight and level flight (degrees).
    pub trim_aoa: f64,
    /// Airspeed margin over Vs below which lift collapses with speed (1.15 = 15 %).
    pub speed_stall_margin: f64,
    /// Lift multiplier at zero height within one wingspan of the ground.
    pub ground_effect_multiplier: f64,
}

/// Drag polar: `C_D = C_D0 + K·C_L²`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Parasite (zero-lift) drag coefficient.
    pub c_d_0: f64,
    /// Induced drag factor, `1 / (π·AR·e)`.
    pub k: f64,
}

impl AeroCoefficients {
    pub fn predator() -> Self {
        Self {
            lift: LiftCoefficients {
                c_l_0: 0.28,
                c_l_alpha: 5.5,
                c_l_max: 1.4,
                stall_aoa: 16.0,
                stall_sharpness: 6.0,
                trim_aoa: 3.0,
                speed_stall_margin: 1.15,
                ground_effect_multiplier: 1.1,
            },
            drag: DragCoefficients {
                c_d_0: 0.028,
                k: 0.020, // 1/(π · 19.1 · 0.83)
            },
        }
    }
}

impl Default for AeroCoefficients {
    fn default() -> Self {
        Self::predator()
    }
}
