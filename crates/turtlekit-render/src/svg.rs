//! SVG document generation from a recorded pen path.
//!
//! Each segment becomes one `<line>` element in its recorded color. The
//! canvas has a fixed size and the coordinate translation places the plane
//! origin at the canvas center; nothing is scaled or auto-fitted, so points
//! outside the canvas are simply clipped by the viewer.

use turtlekit_core::model::Segment;

/// Fixed canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 500;

/// Fixed canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 500;

const STROKE_WIDTH: u32 = 2;
const BACKGROUND: &str = "#f0f0f0";

/// Renders the recorded path as a self-contained SVG document.
pub fn render_document(path: &[Segment]) -> String {
    let center_x = CANVAS_WIDTH as f64 / 2.0;
    let center_y = CANVAS_HEIGHT as f64 / 2.0;

    let mut lines = String::new();
    for segment in path {
        let x1 = segment.start.x + center_x;
        let y1 = segment.start.y + center_y;
        let x2 = segment.end.x + center_x;
        let y2 = segment.end.y + center_y;
        lines.push_str(&format!(
            "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            x1, y1, x2, y2, segment.color, STROKE_WIDTH
        ));
    }

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
         style=\"background-color:{bg};\">\n{lines}</svg>\n",
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT,
        bg = BACKGROUND,
        lines = lines
    )
}
