//! Angle and distance helpers.
//!
//! All angles are in degrees: 0° points along +x (east) and angles grow
//! counter-clockwise, so 90° is +y (north). Relative turns are positive to
//! the left.

use crate::types::Position;

/// Reduce an angle to the half-open range (-180, 180].
///
/// Used for every turn command so that a turn never exceeds half a rotation.
pub fn normalize_relative(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a > 180.0 {
        a - 360.0
    } else {
        a
    }
}

/// Reduce an angle to the half-open range [0, 360).
pub fn normalize_absolute(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Absolute bearing from `from` to `to` in degrees, `atan2(dy, dx)`.
///
/// The result lies in (-180, 180]. Callers subtract their own heading and
/// normalize to obtain a turn command.
pub fn bearing_to(from: &Position, to: &Position) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

/// Euclidean distance between two points.
pub fn distance_to(a: &Position, b: &Position) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    (dx * dx + dy * dy).sqrt()
}

/// Unit vector `(cos, sin)` pointing along `heading`.
pub fn heading_vector(heading: f64) -> (f64, f64) {
    let rad = heading.to_radians();
    (rad.cos(), rad.sin())
}

/// Signed turn (positive = left) that brings `current` onto `target`.
pub fn turn_toward(current: f64, target: f64) -> f64 {
    normalize_relative(target - current)
}
