//! The turtle state machine: pose tracking and pen-path recording.

use crate::model::{Color, Point, Pose, Segment};

/// Capability contract for anything that can act as a turtle.
///
/// Drawing routines and the path planner depend only on this trait, never on
/// a concrete turtle type, so test doubles and alternative recorders can be
/// substituted freely.
pub trait Turtle {
    /// Moves the pen `distance` units along the current heading, recording a
    /// segment. Negative distances move backward; zero is accepted.
    fn forward(&mut self, distance: f64);

    /// Rotates the heading by `angle_degrees`. The heading accumulates raw,
    /// with no wraparound. Never records a segment.
    fn turn(&mut self, angle_degrees: f64);

    /// Current pen position.
    fn position(&self) -> Point;

    /// Current heading in degrees, not range-reduced.
    fn heading(&self) -> f64;

    /// Stroke color applied to subsequently recorded segments.
    fn set_color(&mut self, color: Color);

    /// The recorded path, in drawing order. Read-only: the history cannot be
    /// mutated through this handle.
    fn path(&self) -> &[Segment];
}

/// The standard path-recording turtle.
///
/// The pen is always down: every `forward` appends exactly one segment, so
/// after N moves the path holds N contiguous segments (each segment's end is
/// the next one's start).
#[derive(Debug, Clone)]
pub struct SimpleTurtle {
    pose: Pose,
    color: Color,
    path: Vec<Segment>,
}

impl SimpleTurtle {
    /// Creates a turtle at the origin, heading 0 (facing +X), pen color black.
    pub fn new() -> Self {
        Self::with_pose(Pose::default())
    }

    /// Creates a turtle at an arbitrary starting pose.
    pub fn with_pose(pose: Pose) -> Self {
        Self {
            pose,
            color: Color::default(),
            path: Vec::new(),
        }
    }

    /// Current pose (position plus heading).
    pub fn pose(&self) -> Pose {
        self.pose
    }
}

impl Default for SimpleTurtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle for SimpleTurtle {
    fn forward(&mut self, distance: f64) {
        let heading_radians = self.pose.heading_degrees.to_radians();
        let start = self.pose.position;
        let end = Point::new(
            start.x + distance * heading_radians.cos(),
            start.y + distance * heading_radians.sin(),
        );

        self.path.push(Segment::new(start, end, self.color.clone()));
        self.pose.position = end;
    }

    fn turn(&mut self, angle_degrees: f64) {
        self.pose.heading_degrees += angle_degrees;
    }

    fn position(&self) -> Point {
        self.pose.position
    }

    fn heading(&self) -> f64 {
        self.pose.heading_degrees
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn path(&self) -> &[Segment] {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_forward_records_one_segment() {
        let mut turtle = SimpleTurtle::new();
        turtle.forward(50.0);

        assert_eq!(turtle.path().len(), 1);
        let seg = &turtle.path()[0];
        assert!((seg.end.x - 50.0).abs() < EPSILON);
        assert!(seg.end.y.abs() < EPSILON);
        assert_eq!(turtle.position(), seg.end);
    }

    #[test]
    fn test_forward_follows_heading() {
        let mut turtle = SimpleTurtle::new();
        turtle.turn(90.0);
        turtle.forward(10.0);

        let pos = turtle.position();
        assert!(pos.x.abs() < EPSILON);
        assert!((pos.y - 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_negative_distance_moves_backward() {
        let mut turtle = SimpleTurtle::new();
        turtle.forward(-25.0);

        assert!((turtle.position().x + 25.0).abs() < EPSILON);
        assert_eq!(turtle.path().len(), 1);
    }

    #[test]
    fn test_turn_never_appends_a_segment() {
        let mut turtle = SimpleTurtle::new();
        turtle.turn(45.0);
        turtle.turn(-400.0);
        assert!(turtle.path().is_empty());
    }

    #[test]
    fn test_heading_accumulates_without_wraparound() {
        let mut turtle = SimpleTurtle::new();
        turtle.turn(270.0);
        turtle.turn(270.0);
        assert!((turtle.heading() - 540.0).abs() < EPSILON);
    }

    #[test]
    fn test_path_is_contiguous() {
        let mut turtle = SimpleTurtle::new();
        for i in 0..5 {
            turtle.forward(10.0 + i as f64);
            turtle.turn(30.0);
        }

        let path = turtle.path();
        assert_eq!(path.len(), 5);
        for pair in path.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_set_color_applies_to_later_segments() {
        let mut turtle = SimpleTurtle::new();
        turtle.forward(10.0);
        turtle.set_color(Color::new("red"));
        turtle.forward(10.0);

        assert_eq!(turtle.path()[0].color.as_str(), "black");
        assert_eq!(turtle.path()[1].color.as_str(), "red");
    }

    #[test]
    fn test_with_pose_starts_at_given_pose() {
        let pose = Pose::new(Point::new(3.0, -4.0), 30.0);
        let turtle = SimpleTurtle::with_pose(pose);
        assert_eq!(turtle.position(), Point::new(3.0, -4.0));
        assert!((turtle.heading() - 30.0).abs() < EPSILON);
    }
}
