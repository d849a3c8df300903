//! Minimal DXF R12 encoding: tagged groups, two lines each (code, value).

use std::collections::BTreeSet;
use std::fmt::Display;
use std::io::{self, Write};

use nalgebra::Point3;

use crate::{Entity, EntityKind};

fn group<W: Write, V: Display>(w: &mut W, code: i32, value: V) -> io::Result<()> {
    writeln!(w, "{code}")?;
    writeln!(w, "{value}")
}

fn point<W: Write>(w: &mut W, base: i32, p: &Point3<f64>) -> io::Result<()> {
    group(w, base, p.x)?;
    group(w, base + 10, p.y)?;
    group(w, base + 20, p.z)
}

pub(crate) fn write_document<W: Write>(
    w: &mut W,
    pdmode: i32,
    layers: &BTreeSet<String>,
    entities: &[Entity],
) -> io::Result<()> {
    header(w, pdmode)?;
    tables(w, layers)?;

    group(w, 0, "SECTION")?;
    group(w, 2, "ENTITIES")?;
    for entity in entities {
        write_entity(w, entity)?;
    }
    group(w, 0, "ENDSEC")?;
    group(w, 0, "EOF")
}

fn header<W: Write>(w: &mut W, pdmode: i32) -> io::Result<()> {
    group(w, 0, "SECTION")?;
    group(w, 2, "HEADER")?;
    group(w, 9, "$ACADVER")?;
    group(w, 1, "AC1009")?;
    group(w, 9, "$PDMODE")?;
    group(w, 70, pdmode)?;
    group(w, 0, "ENDSEC")
}

fn tables<W: Write>(w: &mut W, layers: &BTreeSet<String>) -> io::Result<()> {
    group(w, 0, "SECTION")?;
    group(w, 2, "TABLES")?;

    group(w, 0, "TABLE")?;
    group(w, 2, "LTYPE")?;
    group(w, 70, 1)?;
    group(w, 0, "LTYPE")?;
    group(w, 2, "CONTINUOUS")?;
    group(w, 70, 0)?;
    group(w, 3, "Solid line")?;
    group(w, 72, 65)?;
    group(w, 73, 0)?;
    group(w, 40, 0.0)?;
    group(w, 0, "ENDTAB")?;

    group(w, 0, "TABLE")?;
    group(w, 2, "LAYER")?;
    group(w, 70, layers.len())?;
    for layer in layers {
        group(w, 0, "LAYER")?;
        group(w, 2, layer)?;
        group(w, 70, 0)?;
        group(w, 62, 7)?;
        group(w, 6, "CONTINUOUS")?;
    }
    group(w, 0, "ENDTAB")?;

    group(w, 0, "ENDSEC")
}

fn write_entity<W: Write>(w: &mut W, entity: &Entity) -> io::Result<()> {
    match &entity.kind {
        EntityKind::Line { from, to } => {
            group(w, 0, "LINE")?;
            common(w, entity)?;
            point(w, 10, from)?;
            point(w, 11, to)
        }
        EntityKind::Polyline { points, closed } => {
            group(w, 0, "POLYLINE")?;
            common(w, entity)?;
            group(w, 66, 1)?;
            point(w, 10, &Point3::origin())?;
            // 3D polyline (8), closed (1).
            group(w, 70, 8 + i32::from(*closed))?;
            for p in points {
                group(w, 0, "VERTEX")?;
                group(w, 8, &entity.layer)?;
                point(w, 10, p)?;
                // 3D polyline vertex.
                group(w, 70, 32)?;
            }
            group(w, 0, "SEQEND")?;
            group(w, 8, &entity.layer)
        }
        EntityKind::Point { at } => {
            group(w, 0, "POINT")?;
            common(w, entity)?;
            point(w, 10, at)
        }
        EntityKind::Text {
            text,
            at,
            height,
            style,
        } => {
            group(w, 0, "TEXT")?;
            common(w, entity)?;
            point(w, 10, at)?;
            group(w, 40, height)?;
            group(w, 1, text)?;
            if let Some(style) = style {
                group(w, 7, style)?;
            }
            Ok(())
        }
    }
}

fn common<W: Write>(w: &mut W, entity: &Entity) -> io::Result<()> {
    group(w, 8, &entity.layer)?;
    group(w, 62, entity.color)
}
