//! # TurtleKit Core
//!
//! Core types and algorithms for TurtleKit: the turtle state machine,
//! geometry utilities, shape-drawing routines, and the waypoint path
//! planner. Rendering of the recorded pen path lives in `turtlekit-render`.

pub mod error;
pub mod geometry;
pub mod model;
pub mod planner;
pub mod shapes;
pub mod turtle;

pub use error::{Error, RenderError, Result};
pub use geometry::{bearing, chord_length, distance, normalize_turn};
pub use model::{Color, Point, Pose, Segment};
pub use planner::find_path;
pub use shapes::{draw_approximate_circle, draw_personal_art, draw_square};
pub use turtle::{SimpleTurtle, Turtle};
