//! # TurtleKit
//!
//! A teaching-oriented turtle-graphics toolkit: a virtual pen moves across a
//! 2D plane under forward/turn commands, geometric quantities are derived
//! from the resulting figures, and the recorded trajectory is rendered as a
//! static SVG image.
//!
//! ## Architecture
//!
//! TurtleKit is organized as a workspace:
//!
//! 1. **turtlekit-core** - Turtle state machine, geometry utilities,
//!    drawing routines, waypoint path planner
//! 2. **turtlekit-render** - SVG generation, artifact persistence, viewer
//!    launching
//! 3. **turtlekit** - Demo binary that integrates both crates

pub use turtlekit_core::{
    bearing, chord_length, distance, draw_approximate_circle, draw_personal_art, draw_square,
    find_path, normalize_turn, Color, Error, Point, Pose, RenderError, Result, Segment,
    SimpleTurtle, Turtle,
};

pub use turtlekit_render::{
    render_document, render_path, FileSink, NoopViewer, RenderConfig, RenderSink, SystemViewer,
    ViewerLauncher, CANVAS_HEIGHT, CANVAS_WIDTH,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
