//! Triangle ingestion: a JSON file or the output of a generator process.
//!
//! The wire shape is a top-level array of 3-element arrays of `{x, y}`
//! objects. Points may carry an optional `z`; the hex generator emits
//! planar data. There is no retry, caching, or partial success: any failure
//! aborts the load before geometry exists.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use nalgebra::Point3;
use serde::Deserialize;

use crate::error::Error;
use crate::geometry::Triangle;

/// Where the triangle list comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// A JSON file on disk.
    File(PathBuf),
    /// An external generator whose stdout carries the same JSON shape.
    /// A non-zero exit status is fatal; stderr is passed through.
    Generator {
        program: PathBuf,
        args: Vec<String>,
    },
}

impl Source {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Source::File(path.into())
    }

    /// A generator invoked with no arguments.
    pub fn generator(program: impl Into<PathBuf>) -> Self {
        Source::Generator {
            program: program.into(),
            args: Vec::new(),
        }
    }
}

/// One vertex of the input format.
#[derive(Debug, Deserialize)]
struct RawPoint {
    x: f64,
    y: f64,
    #[serde(default)]
    z: f64,
}

/// Load the ordered triangle list from `source`.
pub fn load(source: &Source) -> Result<Vec<Triangle>, Error> {
    let text = match source {
        Source::File(path) => fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?,
        Source::Generator { program, args } => run_generator(program, args)?,
    };
    let triangles = parse_triangles(&text)?;
    log::info!("loaded {} triangles", triangles.len());
    Ok(triangles)
}

fn run_generator(program: &Path, args: &[String]) -> Result<String, Error> {
    log::debug!("running geometry generator {:?}", program);
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| Error::Spawn {
            program: program.to_path_buf(),
            source,
        })?;
    if !output.status.success() {
        return Err(Error::Generator {
            program: program.to_path_buf(),
            status: output.status,
        });
    }
    String::from_utf8(output.stdout).map_err(|_| Error::GeneratorOutput {
        program: program.to_path_buf(),
    })
}

fn parse_triangles(text: &str) -> Result<Vec<Triangle>, Error> {
    let raw: Vec<[RawPoint; 3]> = serde_json::from_str(text)?;
    Ok(raw
        .into_iter()
        .map(|[a, b, c]| {
            Triangle::new(
                Point3::new(a.x, a.y, a.z),
                Point3::new(b.x, b.y, b.z),
                Point3::new(c.x, c.y, c.z),
            )
        })
        .collect())
}
