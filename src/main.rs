use turtlekit::{
    chord_length, distance, draw_approximate_circle, draw_personal_art, draw_square, find_path,
    init_logging, render_path, Point, RenderConfig, SimpleTurtle, SystemViewer, Turtle,
};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let mut turtle = SimpleTurtle::new();

    draw_square(&mut turtle, 100.0);
    tracing::info!(
        "Chord length for radius 5, angle 60 degrees: {}",
        chord_length(5.0, 60.0)
    );

    draw_approximate_circle(&mut turtle, 100.0, 360);
    tracing::info!(
        "Distance between points (1,2) and (4,6): {}",
        distance(Point::new(1.0, 2.0), Point::new(4.0, 6.0))
    );

    let instructions = find_path(
        &turtle,
        &[
            Point::new(20.0, 20.0),
            Point::new(80.0, 20.0),
            Point::new(80.0, 80.0),
        ],
    );
    tracing::info!("Path instructions: {:?}", instructions);

    draw_personal_art(&mut turtle);

    let config = RenderConfig::default().with_auto_open(true);
    render_path(turtle.path(), &config, &SystemViewer)?;

    Ok(())
}
