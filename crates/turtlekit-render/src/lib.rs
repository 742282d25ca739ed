//! # TurtleKit Render
//!
//! Turns a recorded turtle path into a static SVG artifact: document
//! generation, single-shot file persistence, and best-effort viewer launch.
//! Nothing here flows back into the turtle.

pub mod config;
pub mod sink;
pub mod svg;
pub mod viewer;

pub use config::RenderConfig;
pub use sink::{FileSink, RenderSink};
pub use svg::{render_document, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use viewer::{NoopViewer, SystemViewer, ViewerLauncher};

use turtlekit_core::error::Result;
use turtlekit_core::model::Segment;

/// Renders `path` and persists it per `config`.
///
/// The write is a single attempt whose failure propagates to the caller.
/// The viewer launch (when `auto_open` is set) is fire-and-forget: a
/// failure is logged and the run continues.
pub fn render_path(
    path: &[Segment],
    config: &RenderConfig,
    viewer: &dyn ViewerLauncher,
) -> Result<()> {
    let document = render_document(path);
    FileSink.write(&document, &config.output_path)?;

    if config.auto_open {
        if let Err(e) = viewer.open(&config.output_path) {
            tracing::warn!(error = %e, "could not open rendered document in a viewer");
        }
    }

    Ok(())
}
