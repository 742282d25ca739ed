//! Waypoint path planning: turning an ordered list of target points into
//! turn/forward instructions.

use crate::geometry::{bearing, distance, normalize_turn};
use crate::model::Point;
use crate::turtle::Turtle;

/// Synthesizes the instruction sequence that would steer `turtle` through
/// `targets` in order.
///
/// The result alternates `"turn <degrees>"` and `"forward <distance>"`
/// strings, one pair per target, both values formatted to two decimal
/// places. Turn amounts use the non-negative `[0, 360)` convention of
/// [`normalize_turn`]; the running heading carries the raw bearing forward
/// between targets.
///
/// This is pure planning: the turtle is only read for its starting pose and
/// is never mutated.
pub fn find_path<T: Turtle>(turtle: &T, targets: &[Point]) -> Vec<String> {
    let mut instructions = Vec::with_capacity(targets.len() * 2);
    let mut current_pos = turtle.position();
    let mut heading = turtle.heading();

    for target in targets {
        let target_bearing = bearing(current_pos, *target);
        let turn_amount = normalize_turn(target_bearing, heading);

        instructions.push(format!("turn {:.2}", turn_amount));
        instructions.push(format!("forward {:.2}", distance(current_pos, *target)));

        current_pos = *target;
        heading = target_bearing;
    }

    tracing::debug!(
        targets = targets.len(),
        instructions = instructions.len(),
        "planned waypoint path"
    );
    instructions
}
