//! Angle and vector helpers for the complex-plane health model
//!
//! Health vectors are `glam::DVec2` values read as complex numbers:
//! `x` is the real part and `y` the imaginary part.

use glam::DVec2;
use std::f64::consts::{PI, TAU};

/// Convert degrees to radians
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Map an angle into [0, 2π) with a single correction of ±2π.
///
/// The input must already lie within one period of the target range,
/// i.e. in [-2π, 4π). Use [`wrap_angle`] for arbitrary inputs.
pub fn normalize_principal(radians: f64) -> f64 {
    if radians >= TAU {
        radians - TAU
    } else if radians < 0.0 {
        // A tiny negative input can round up to exactly 2π
        let shifted = radians + TAU;
        if shifted >= TAU {
            0.0
        } else {
            shifted
        }
    } else {
        radians
    }
}

/// Map any angle into [0, 2π)
pub fn wrap_angle(radians: f64) -> f64 {
    let wrapped = radians.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Build a vector from magnitude and angle in radians
pub fn from_polar(magnitude: f64, radians: f64) -> DVec2 {
    DVec2::new(magnitude * radians.cos(), magnitude * radians.sin())
}

/// Build a vector from magnitude and angle in degrees
pub fn from_polar_degrees(magnitude: f64, degrees: f64) -> DVec2 {
    from_polar(magnitude, deg_to_rad(degrees))
}

/// Argument of a vector in (-π, π]. The zero vector has argument 0.
pub fn argument(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Round a scalar to `digits` decimal places
pub fn round_to(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    // Avoid printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round both components of a vector for display
pub fn round_vector(v: DVec2, digits: u32) -> DVec2 {
    DVec2::new(round_to(v.x, digits), round_to(v.y, digits))
}
