//! The factored render pipeline.
//!
//! One routine covers both script variants, parameterized by source,
//! outline mode, ring partition, and per-ring style. Every ingestion and
//! sizing failure surfaces before the first draw call reaches any target.

use std::ops::Range;

use nalgebra::Point3;

use crate::draw::{Color, Drawable, PointStyle, Target, TextAttr};
use crate::error::Error;
use crate::geometry::Triangle;
use crate::rings::{ring_ranges, RingSpec};
use crate::source::{self, Source};
use crate::transform::{outline, scale, translate, OutlineMode};

// Documentation block layout: title at (5, 15), following lines from
// (5, 12) stepping down 2 per line.
const LEGEND_TITLE_AT: (f64, f64) = (5.0, 15.0);
const LEGEND_LINES_AT: (f64, f64) = (5.0, 12.0);
const LEGEND_LINE_STEP: f64 = 2.0;
const LEGEND_TITLE_HEIGHT: f64 = 2.0;
const LEGEND_FONT: &str = "OpenSans";
const LEGEND_LAYER: &str = "DOCUMENTATION";

/// Static annotation text drawn onto every target. Legend coordinates are
/// drawing coordinates; the geometry scale does not apply to them.
#[derive(Debug, Clone)]
pub struct Legend {
    pub title: String,
    pub lines: Vec<String>,
}

/// Everything that varies between the pipeline's callers.
#[derive(Debug)]
pub struct DrawJob {
    pub source: Source,
    pub outline: OutlineMode,
    /// Uniform scale applied to the whole list before drawing.
    pub scale: f64,
    /// Draw color when no ring partition is given.
    pub color: Color,
    pub point_style: PointStyle,
    /// Partition of the triangle list into styled rings. Ring jobs also
    /// label every triangle with its list index.
    pub rings: Option<Vec<RingSpec>>,
    /// Text height of the per-triangle index labels.
    pub label_height: f64,
    pub legend: Option<Legend>,
}

impl DrawJob {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            outline: OutlineMode::Lines,
            scale: 1.0,
            color: Color::Red,
            point_style: PointStyle::CircleX,
            rings: None,
            label_height: 1.0,
            legend: None,
        }
    }
}

/// Run `job` against `targets`: load, transform, dispatch styled draws,
/// labels and legend, then display every target in slice order.
///
/// Callers put file targets before interactive ones: an interactive
/// target's `display` blocks until the viewer is closed.
pub fn render(job: &DrawJob, targets: &mut [Target]) -> Result<(), Error> {
    let triangles = source::load(&job.source)?;

    let ranges = match &job.rings {
        Some(specs) => Some(ring_ranges(triangles.len(), specs)?),
        None => None,
    };

    let mut elements = outline(&triangles, job.outline);
    scale(&mut elements, job.scale);
    log::debug!("outlined {} elements", elements.len());

    let per_triangle = job.outline.elements_per_triangle();
    if let (Some(specs), Some(ranges)) = (&job.rings, &ranges) {
        for (spec, range) in specs.iter().zip(ranges) {
            let slice = &mut elements[range.start * per_triangle..range.end * per_triangle];
            translate(slice, &spec.offset);
        }
    }

    for target in targets.iter_mut() {
        let d = target.drawable.as_mut();
        d.set_pointstyle(job.point_style);
        match (&job.rings, &ranges) {
            (Some(specs), Some(ranges)) => {
                for (spec, range) in specs.iter().zip(ranges) {
                    d.set_linecolor(spec.color);
                    d.draw(&elements[range.start * per_triangle..range.end * per_triangle]);
                }
                label_triangles(d, &triangles, specs, ranges, job);
            }
            _ => {
                d.set_linecolor(job.color);
                d.draw(&elements);
            }
        }
        if let Some(legend) = &job.legend {
            draw_legend(d, legend, target.legend_color);
        }
    }

    for target in targets.iter_mut() {
        target.drawable.display()?;
    }
    Ok(())
}

/// Label each triangle with its list index at the scaled centroid plus the
/// owning ring's offset, in the ring's color.
fn label_triangles(
    d: &mut dyn Drawable,
    triangles: &[Triangle],
    specs: &[RingSpec],
    ranges: &[Range<usize>],
    job: &DrawJob,
) {
    let attr = TextAttr::with_height(job.label_height);
    for (spec, range) in specs.iter().zip(ranges) {
        d.set_linecolor(spec.color);
        for index in range.clone() {
            let at = Point3::from(triangles[index].centroid().coords * job.scale + spec.offset);
            d.draw_text(&index.to_string(), at, &attr);
        }
    }
}

fn draw_legend(d: &mut dyn Drawable, legend: &Legend, color: Color) {
    d.set_layer(LEGEND_LAYER);
    d.set_linecolor(color);
    d.draw_text(
        &legend.title,
        Point3::new(LEGEND_TITLE_AT.0, LEGEND_TITLE_AT.1, 0.0),
        &TextAttr {
            height: LEGEND_TITLE_HEIGHT,
            font: Some(LEGEND_FONT.to_string()),
            bold: true,
        },
    );
    for (i, line) in legend.lines.iter().enumerate() {
        let y = LEGEND_LINES_AT.1 - LEGEND_LINE_STEP * i as f64;
        d.draw_text(line, Point3::new(LEGEND_LINES_AT.0, y, 0.0), &TextAttr::default());
    }
}
