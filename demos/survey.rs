//! Surveys a small ceiling outline and prints its metrics and drawing layout.
//!
//! Usage:
//! ```text
//! cargo run --example survey
//! cargo run --example survey --features tracing    # with builder logging
//! RUST_LOG=roomplan=trace cargo run --example survey --features tracing
//! ```

use roomplan::units::{CENTIMETRE, DEGREE};
use roomplan::{FigureMeasures, LayoutConfig, PointSpec, Polygon, RenderLayout, UnitContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Default: WARN for everything, INFO for roomplan.
    // Override with RUST_LOG env var (e.g. RUST_LOG=roomplan=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("roomplan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut ceiling = Polygon::with_origin();
    let walk = [
        PointSpec::by_direction(125.0, 90.0, CENTIMETRE, DEGREE),
        PointSpec::by_angle(27.0, 90.0, CENTIMETRE, DEGREE),
        PointSpec::by_angle(46.0, 270.0, CENTIMETRE, DEGREE),
        PointSpec::absolute(222.01, 169.98, CENTIMETRE),
        PointSpec::absolute(225.0, 0.0, CENTIMETRE),
    ];
    for spec in &walk {
        ceiling.add(spec)?;
    }

    let measures = FigureMeasures::from_context(&UnitContext::default())?;
    let summary = ceiling.summary(&measures, 2);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let layout = RenderLayout::new(&ceiling, &measures)
        .with_config(LayoutConfig::default())
        .with_notes(true)
        .execute()?;
    println!(
        "canvas {}x{} at {:.3} px/{}",
        layout.canvas_width, layout.canvas_height, layout.scale, measures.length
    );
    for vertex in &layout.vertices {
        println!("  {} @ ({:.1}, {:.1})", vertex.label, vertex.pixel_x, vertex.pixel_y);
    }
    for edge in &layout.edges {
        println!("  {} = {} @ ({:.1}, {:.1})", edge.label, edge.text, edge.pixel_x, edge.pixel_y);
    }
    for line in &layout.notes {
        println!("  | {line}");
    }
    Ok(())
}
