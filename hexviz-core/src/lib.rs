//! Shared geometry model and render pipeline for hex-subdivision drawings.
//!
//! The pipeline loads a triangle list (a JSON file or the stdout of a
//! generator process), outlines it into line/polygon primitives, applies a
//! uniform scale and optional per-ring offsets, and dispatches styled draw
//! calls to any number of drawable targets. The concrete targets live in
//! their own crates behind the [`Drawable`] trait: the DXF file writer and
//! the interactive terminal viewer.

pub mod draw;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod rings;
pub mod source;
pub mod transform;

// Re-export commonly used types
pub use draw::{Color, Drawable, PointStyle, Target, TextAttr};
pub use error::Error;
pub use geometry::{Element, Triangle};
pub use pipeline::{render, DrawJob, Legend};
pub use rings::{hex_ring_bounds, ring_ranges, RingSpec};
pub use source::Source;
pub use transform::OutlineMode;
