pub mod contact;
pub mod roll;

pub use contact::{apply_touchdown_damping, terrain_impact, touchdown_check, update_collision_warning};
pub use roll::{
    ground_longitudinal_accel, grounded_rate_derivatives, liftoff_accel, rolling_forces,
    rotation_authority, RollingForces, RotationAuthority,
};
