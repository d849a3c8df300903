//! Ring variant: run the hex generator, draw each subdivision ring as
//! closed polygons in its own color, stacked along +z and labeled with
//! triangle indices, write `subdivision-rings-out.dxf`, then open the
//! viewer.

use anyhow::Context;
use hexviz_cli::standard_targets;
use hexviz_core::{hex_ring_bounds, render, Color, DrawJob, Legend, OutlineMode, RingSpec, Source};
use nalgebra::Vector3;

const RING_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
/// Vertical spacing between rings. Purely visual; the DXF plan view is
/// unaffected.
const RING_LIFT: f64 = 5.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let rings: Vec<RingSpec> = hex_ring_bounds(RING_COLORS.len())
        .into_iter()
        .zip(RING_COLORS)
        .enumerate()
        .map(|(i, (end, color))| {
            RingSpec::new(end, color, Vector3::new(0.0, 0.0, RING_LIFT * i as f64))
        })
        .collect();

    let mut job = DrawJob::new(Source::generator("./makegeom.js"));
    job.outline = OutlineMode::Polygons;
    job.scale = 10.0;
    job.rings = Some(rings);
    job.legend = Some(Legend {
        title: "X5 subdivision".to_string(),
        lines: vec![
            "makegeom.js".to_string(),
            "hex subdivision rings".to_string(),
        ],
    });

    let mut targets = standard_targets("subdivision-rings-out");
    render(&job, &mut targets).context("rendering the subdivision rings")?;
    Ok(())
}
