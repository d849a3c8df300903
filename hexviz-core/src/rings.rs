//! Ring partitioning of the triangle list.
//!
//! A subdivided hexagon's triangles arrive ordered by subdivision level:
//! ring i holds 6·4^i triangles. Ring specs slice the list into those
//! contiguous ranges so each level can be colored, offset, and labeled on
//! its own.

use std::ops::Range;

use nalgebra::Vector3;

use crate::draw::Color;
use crate::error::Error;

/// One ring: the triangles `[previous end, end)`, drawn in `color` and
/// translated by `offset` before drawing.
#[derive(Debug, Clone)]
pub struct RingSpec {
    /// Exclusive upper triangle index of this ring.
    pub end: usize,
    pub color: Color,
    pub offset: Vector3<f64>,
}

impl RingSpec {
    pub fn new(end: usize, color: Color, offset: Vector3<f64>) -> Self {
        Self { end, color, offset }
    }
}

/// Cumulative ring bounds of a subdivided hexagon.
///
/// Ring i holds 6·4^i triangles, so three rings give [6, 30, 126].
pub fn hex_ring_bounds(rings: usize) -> Vec<usize> {
    let mut bounds = Vec::with_capacity(rings);
    let mut total = 0usize;
    let mut ring = 6usize;
    for _ in 0..rings {
        total += ring;
        bounds.push(total);
        ring *= 4;
    }
    bounds
}

/// Triangle index ranges for `specs`, validated against the input length.
///
/// Bounds must start above zero and increase strictly, and the final bound
/// must equal `triangle_count`: a partition that does not exactly cover the
/// input is a sizing error, never a silent truncation or an index panic.
pub fn ring_ranges(triangle_count: usize, specs: &[RingSpec]) -> Result<Vec<Range<usize>>, Error> {
    let bounds: Vec<usize> = specs.iter().map(|spec| spec.end).collect();
    let Some(&expected) = bounds.last() else {
        return Err(Error::RingBounds { bounds });
    };
    if bounds[0] == 0 || !bounds.windows(2).all(|w| w[0] < w[1]) {
        return Err(Error::RingBounds { bounds });
    }
    if expected != triangle_count {
        return Err(Error::RingSizing {
            expected,
            actual: triangle_count,
        });
    }

    let mut ranges = Vec::with_capacity(bounds.len());
    let mut start = 0;
    for &end in &bounds {
        ranges.push(start..end);
        start = end;
    }
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specs(bounds: &[usize]) -> Vec<RingSpec> {
        bounds
            .iter()
            .map(|&end| RingSpec::new(end, Color::Red, Vector3::zeros()))
            .collect()
    }

    #[test]
    fn three_hex_rings_are_six_thirty_and_onetwentysix() {
        assert_eq!(hex_ring_bounds(3), vec![6, 30, 126]);
    }

    #[test]
    fn ranges_cover_the_input_with_no_gaps_or_overlaps() {
        let ranges = ring_ranges(126, &specs(&hex_ring_bounds(3))).unwrap();
        assert_eq!(ranges, vec![0..6, 6..30, 30..126]);

        let mut covered = vec![false; 126];
        for range in &ranges {
            for i in range.clone() {
                assert!(!covered[i], "index {i} covered twice");
                covered[i] = true;
            }
        }
        assert!(covered.into_iter().all(|c| c));
    }

    #[test]
    fn count_mismatch_is_a_sizing_error() {
        match ring_ranges(125, &specs(&[6, 30, 126])) {
            Err(Error::RingSizing { expected, actual }) => {
                assert_eq!(expected, 126);
                assert_eq!(actual, 125);
            }
            other => panic!("expected sizing error, got {other:?}"),
        }
    }

    #[test]
    fn non_increasing_bounds_are_rejected() {
        assert!(matches!(
            ring_ranges(30, &specs(&[6, 6, 30])),
            Err(Error::RingBounds { .. })
        ));
        assert!(matches!(
            ring_ranges(30, &specs(&[30, 6])),
            Err(Error::RingBounds { .. })
        ));
    }

    #[test]
    fn empty_and_zero_leading_bounds_are_rejected() {
        assert!(matches!(ring_ranges(0, &specs(&[])), Err(Error::RingBounds { .. })));
        assert!(matches!(
            ring_ranges(6, &specs(&[0, 6])),
            Err(Error::RingBounds { .. })
        ));
    }
}
