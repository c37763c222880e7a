pub const GRAVITY: f64 = 9.81; // m/s^2
pub const SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3
pub const SCALE_HEIGHT: f64 = 8500.0; // m, barometric scale height

pub const MAX_TIMESTEP: f64 = 0.05; // Largest integration step (20 Hz floor)
pub const MIN_TIMESTEP: f64 = 1.0e-4; // Smallest integration step

// Geodetic approximations
pub const METERS_PER_DEGREE_LAT: f64 = 111_320.0;

// Numerical floors
pub const MIN_TRUE_AIRSPEED: f64 = 0.5; // m/s, floor before dynamic pressure
pub const MIN_GAMMA_AIRSPEED: f64 = 5.0; // m/s, floor in flight-path-angle rate
pub const MIN_G_FORCE: f64 = 0.01;
pub const GROUND_CONTACT_EPSILON: f64 = 1.0e-6; // m

// Physical limits
pub const MAX_FLIGHT_PATH_ANGLE: f64 = 50.0; // deg
pub const GIMBAL_GUARD_PITCH: f64 = 50.0; // deg, above this Euler rates fall back to p/q
pub const G_PENALTY_ONSET: f64 = 1.5; // G above which manoeuvres bleed speed
pub const AT_REST_SPEED: f64 = 0.5; // m/s

pub const MS_TO_KMH: f64 = 3.6;
