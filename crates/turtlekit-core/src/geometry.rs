//! Pure geometry utilities: chord lengths, distances, and heading deltas.
//!
//! These functions are permissive by design: out-of-range or degenerate
//! inputs (zero radius, `angle = 0`, non-finite values) flow through the
//! floating-point arithmetic unchanged rather than being rejected.

use crate::model::Point;

/// Length of a chord subtending `angle_degrees` at the center of a circle
/// of the given radius: `2·r·sin(angle/2)`.
///
/// The result is rounded to 10 decimal digits so that a regular polygon
/// built from these chords closes up cleanly in test comparisons.
pub fn chord_length(radius: f64, angle_degrees: f64) -> f64 {
    let angle_radians = angle_degrees.to_radians();
    round_to_decimals(2.0 * radius * (angle_radians / 2.0).sin(), 10)
}

/// Euclidean distance between two points. No rounding.
pub fn distance(p1: Point, p2: Point) -> f64 {
    p1.distance_to(&p2)
}

/// Turn amount from `heading` to `target_bearing`, reduced into `[0, 360)`.
///
/// The result is always a non-negative counter-clockwise amount, never the
/// signed shortest turn. A target almost directly behind the turtle thus
/// yields a near-360 value; callers relying on this convention include the
/// path planner.
pub fn normalize_turn(target_bearing: f64, heading: f64) -> f64 {
    ((target_bearing - heading) % 360.0 + 360.0) % 360.0
}

/// Absolute bearing in degrees from `from` to `to`, via `atan2(dy, dx)`.
pub fn bearing(from: Point, to: Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x).to_degrees()
}

fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
