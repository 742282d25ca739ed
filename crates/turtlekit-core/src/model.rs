//! Core value types for the drawing plane.

use serde::{Deserialize, Serialize};

/// A point on the 2D drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Stroke color label attached to drawn segments.
///
/// The label is opaque: it is passed through to the renderer as-is, so any
/// value the output format understands (named colors, hex triplets) works.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(String);

impl Color {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self("black".to_string())
    }
}

impl From<&str> for Color {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One atomic drawn stroke, created when the turtle completes a pen-down
/// forward move. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub color: Color,
}

impl Segment {
    pub fn new(start: Point, end: Point, color: Color) -> Self {
        Self { start, end, color }
    }

    /// Length of the stroke.
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Position plus facing direction of a turtle.
///
/// The heading is in degrees and accumulates raw: it is never reduced to a
/// fixed range here. Only the path planner normalizes when computing deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point,
    pub heading_degrees: f64,
}

impl Pose {
    pub fn new(position: Point, heading_degrees: f64) -> Self {
        Self {
            position,
            heading_degrees,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Point::new(0.0, 0.0),
            heading_degrees: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance_to() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_passthrough() {
        let c = Color::new("#ff00aa");
        assert_eq!(c.as_str(), "#ff00aa");
        assert_eq!(c.to_string(), "#ff00aa");
    }

    #[test]
    fn test_default_color_is_black() {
        assert_eq!(Color::default().as_str(), "black");
    }

    #[test]
    fn test_segment_length() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(3.0, 4.0), Color::default());
        assert!((seg.length() - 5.0).abs() < 1e-9);
    }
}
