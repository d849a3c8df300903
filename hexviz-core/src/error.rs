//! Pipeline failure taxonomy.
//!
//! Nothing here is recovered from: the binaries attach context and exit.
//! The variants exist so a failure names the stage it came from.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read geometry file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to run geometry generator {program:?}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("geometry generator {program:?} exited with {status}")]
    Generator {
        program: PathBuf,
        status: ExitStatus,
    },

    #[error("geometry generator {program:?} produced non-UTF-8 output")]
    GeneratorOutput { program: PathBuf },

    #[error("invalid triangle JSON")]
    Json(#[from] serde_json::Error),

    #[error("ring bounds {bounds:?} are not strictly increasing from a non-empty first ring")]
    RingBounds { bounds: Vec<usize> },

    #[error("ring bounds cover {expected} triangles, input has {actual}")]
    RingSizing { expected: usize, actual: usize },

    #[error("drawable target has no output filename")]
    MissingFilename,

    #[error("failed to write {path:?}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
