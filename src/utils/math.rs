use nalgebra::Vector2;
use std::f64::consts::PI;

use crate::utils::constants::METERS_PER_DEGREE_LAT;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Wrap a heading in degrees into `[0, 360)`.
pub fn wrap_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Move `current` toward `target` by at most `step`, never overshooting.
#[inline]
pub fn approach(current: f64, target: f64, step: f64) -> f64 {
    if current < target {
        (current + step).min(target)
    } else {
        (current - step).max(target)
    }
}

/// Replace a non-finite value with `fallback`.
#[inline]
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Unit vector (east, north) pointing along a compass heading in degrees.
pub fn heading_unit(heading_deg: f64) -> Vector2<f64> {
    let heading = deg_to_rad(heading_deg);
    Vector2::new(heading.sin(), heading.cos())
}

/// Local meters-per-degree of (latitude, longitude) at a latitude in degrees.
///
/// The longitude scale is floored so the poles never produce a zero denominator.
pub fn meters_per_degree(latitude_deg: f64) -> (f64, f64) {
    let lon_scale = deg_to_rad(latitude_deg).cos().abs().max(1.0e-6);
    (METERS_PER_DEGREE_LAT, METERS_PER_DEGREE_LAT * lon_scale)
}
