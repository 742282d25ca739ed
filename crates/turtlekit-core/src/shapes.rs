//! Drawing routines composed from the turtle contract.
//!
//! These are pure orchestration over [`Turtle`]: they issue forward/turn
//! sequences and never inspect or correct the resulting path.

use crate::geometry::chord_length;
use crate::turtle::Turtle;

/// Draws a square of the given side length, turning left 90 degrees at each
/// corner. The turtle ends at its starting position with its heading
/// advanced by a full 360 degrees.
pub fn draw_square<T: Turtle>(turtle: &mut T, side_length: f64) {
    for _ in 0..4 {
        turtle.forward(side_length);
        turtle.turn(90.0);
    }
}

/// Approximates a circle of the given radius with a regular polygon of
/// `num_sides` chords.
///
/// Each side is the chord subtending `360 / num_sides` degrees at the
/// center, so larger `num_sides` values hug the true circle more closely.
/// `num_sides = 0` is not validated: the division produces an infinite
/// angle and the chord length degenerates per IEEE arithmetic.
pub fn draw_approximate_circle<T: Turtle>(turtle: &mut T, radius: f64, num_sides: u32) {
    let segment_angle = 360.0 / num_sides as f64;
    let segment_length = chord_length(radius, segment_angle);

    for _ in 0..num_sides {
        turtle.forward(segment_length);
        turtle.turn(segment_angle);
    }
}

/// Draws a fixed five-pointed star: five strokes of length 200 with a
/// 144-degree turn after each. Purely decorative.
pub fn draw_personal_art<T: Turtle>(turtle: &mut T) {
    const STAR_VERTICES: u32 = 5;
    const SIDE_LENGTH: f64 = 200.0;
    const TURN_ANGLE: f64 = 144.0;

    for _ in 0..STAR_VERTICES {
        turtle.forward(SIDE_LENGTH);
        turtle.turn(TURN_ANGLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Point;
    use crate::turtle::SimpleTurtle;

    const EPSILON: f64 = 1e-9;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "expected ({}, {}), got ({}, {})",
            expected.x,
            expected.y,
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_square_traces_four_corners() {
        let mut turtle = SimpleTurtle::new();
        draw_square(&mut turtle, 100.0);

        let path = turtle.path();
        assert_eq!(path.len(), 4);
        assert_point_eq(path[0].start, Point::new(0.0, 0.0));
        assert_point_eq(path[0].end, Point::new(100.0, 0.0));
        assert_point_eq(path[1].end, Point::new(100.0, 100.0));
        assert_point_eq(path[2].end, Point::new(0.0, 100.0));
        assert_point_eq(path[3].end, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_square_advances_heading_by_full_turn() {
        let mut turtle = SimpleTurtle::new();
        draw_square(&mut turtle, 100.0);
        assert!((turtle.heading() - 360.0).abs() < EPSILON);
    }

    #[test]
    fn test_four_sided_circle_is_inscribed_square() {
        let mut turtle = SimpleTurtle::new();
        draw_approximate_circle(&mut turtle, 100.0, 4);

        let path = turtle.path();
        assert_eq!(path.len(), 4);
        let expected_side = 100.0 * std::f64::consts::SQRT_2;
        for seg in path {
            assert!((seg.length() - expected_side).abs() < 1e-8);
        }
    }

    #[test]
    fn test_many_sided_circle_closes_on_start() {
        let mut turtle = SimpleTurtle::new();
        draw_approximate_circle(&mut turtle, 50.0, 360);

        assert_eq!(turtle.path().len(), 360);
        // A full loop of chords comes back to the start within drift.
        let end = turtle.position();
        assert!(end.x.abs() < 1e-6 && end.y.abs() < 1e-6);
    }

    #[test]
    fn test_personal_art_is_a_five_stroke_star() {
        let mut turtle = SimpleTurtle::new();
        draw_personal_art(&mut turtle);

        let path = turtle.path();
        assert_eq!(path.len(), 5);
        for seg in path {
            assert!((seg.length() - 200.0).abs() < EPSILON);
        }
        // 5 turns of 144 degrees = 720, two full revolutions.
        assert!((turtle.heading() - 720.0).abs() < EPSILON);
    }
}
