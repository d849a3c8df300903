//! DXF file drawable target.
//!
//! Buffers entities under the attributes current at draw time and writes a
//! minimal DXF R12 document on `display()`. R12 is the smallest revision
//! that carries everything the pipeline emits: LINE, POLYLINE, POINT, TEXT
//! and the `$PDMODE` point style.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use hexviz_core::{Color, Drawable, Element, Error, PointStyle, TextAttr};
use nalgebra::Point3;

mod writer;

pub(crate) struct Entity {
    pub layer: String,
    pub color: u16,
    pub kind: EntityKind,
}

pub(crate) enum EntityKind {
    Line {
        from: Point3<f64>,
        to: Point3<f64>,
    },
    Polyline {
        points: Vec<Point3<f64>>,
        closed: bool,
    },
    Point {
        at: Point3<f64>,
    },
    Text {
        text: String,
        at: Point3<f64>,
        height: f64,
        style: Option<String>,
    },
}

/// Drawable target that writes `<stem>.dxf` when displayed.
pub struct DxfTarget {
    filename: Option<PathBuf>,
    layer: String,
    color: Color,
    point_style: PointStyle,
    layers: BTreeSet<String>,
    entities: Vec<Entity>,
}

impl DxfTarget {
    pub fn new() -> Self {
        let mut layers = BTreeSet::new();
        layers.insert("0".to_string());
        Self {
            filename: None,
            layer: "0".to_string(),
            color: Color::ByLayer,
            point_style: PointStyle::Dot,
            layers,
            entities: Vec::new(),
        }
    }

    /// Output file stem; the `.dxf` extension is appended on write.
    pub fn set_filename(&mut self, stem: impl Into<PathBuf>) {
        let stem = stem.into();
        log::info!("output file name is {}.dxf", stem.display());
        self.filename = Some(stem);
    }

    fn push(&mut self, kind: EntityKind) {
        self.entities.push(Entity {
            layer: self.layer.clone(),
            color: self.color.aci(),
            kind,
        });
    }
}

impl Default for DxfTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawable for DxfTarget {
    fn set_linecolor(&mut self, color: Color) {
        self.color = color;
    }

    fn set_pointstyle(&mut self, style: PointStyle) {
        self.point_style = style;
    }

    fn set_layer(&mut self, name: &str) {
        self.layer = name.to_string();
        self.layers.insert(name.to_string());
    }

    fn draw(&mut self, elements: &[Element]) {
        for element in elements {
            match element {
                Element::Point(at) => self.push(EntityKind::Point { at: *at }),
                Element::Line(from, to) => self.push(EntityKind::Line {
                    from: *from,
                    to: *to,
                }),
                Element::Polygon(points) => {
                    // A closed polygon stores its first point twice; the
                    // duplicate becomes the closed flag instead.
                    let closed = points.len() > 2 && points.first() == points.last();
                    let points = if closed {
                        points[..points.len() - 1].to_vec()
                    } else {
                        points.clone()
                    };
                    self.push(EntityKind::Polyline { points, closed });
                }
            }
        }
    }

    fn draw_text(&mut self, text: &str, at: Point3<f64>, attr: &TextAttr) {
        let style = attr.font.as_ref().map(|font| {
            if attr.bold {
                format!("{font}-Bold")
            } else {
                font.clone()
            }
        });
        self.push(EntityKind::Text {
            text: text.to_string(),
            at,
            height: attr.height,
            style,
        });
    }

    fn display(&mut self) -> Result<(), Error> {
        let Some(stem) = &self.filename else {
            return Err(Error::MissingFilename);
        };
        let mut os = stem.clone().into_os_string();
        os.push(".dxf");
        let path = PathBuf::from(os);

        let write = || -> std::io::Result<()> {
            let file = File::create(&path)?;
            let mut out = BufWriter::new(file);
            writer::write_document(
                &mut out,
                self.point_style.pdmode(),
                &self.layers,
                &self.entities,
            )
        };
        write().map_err(|source| Error::WriteOutput {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {} entities to {}", self.entities.len(), path.display());
        Ok(())
    }
}
