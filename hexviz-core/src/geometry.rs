//! Geometry primitives for the render pipeline.

use nalgebra::{Point3, Vector3};

/// A triangle from the input data: three vertices, no identity beyond its
/// position in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f64>; 3],
}

impl Triangle {
    pub fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { vertices: [a, b, c] }
    }

    /// Build from planar coordinate pairs (z = 0).
    pub fn from_xy(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Self {
        Self::new(
            Point3::new(a.0, a.1, 0.0),
            Point3::new(b.0, b.1, 0.0),
            Point3::new(c.0, c.1, 0.0),
        )
    }

    /// Arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Point3<f64> {
        let [a, b, c] = &self.vertices;
        Point3::from((a.coords + b.coords + c.coords) / 3.0)
    }
}

/// One drawable primitive.
///
/// A polygon is stored closed: its first point is repeated at the end, and
/// it stays closed under transformation because every point moves
/// identically.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Point(Point3<f64>),
    /// Ordered pair of endpoints.
    Line(Point3<f64>, Point3<f64>),
    Polygon(Vec<Point3<f64>>),
}

impl Element {
    /// Multiply every coordinate by `factor`.
    pub fn scale_mut(&mut self, factor: f64) {
        self.for_each_point(|p| p.coords *= factor);
    }

    /// Add `offset` to every point.
    pub fn translate_mut(&mut self, offset: &Vector3<f64>) {
        self.for_each_point(|p| *p += offset);
    }

    fn for_each_point(&mut self, mut f: impl FnMut(&mut Point3<f64>)) {
        match self {
            Element::Point(p) => f(p),
            Element::Line(a, b) => {
                f(a);
                f(b);
            }
            Element::Polygon(points) => points.iter_mut().for_each(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_of_unit_right_triangle() {
        let tri = Triangle::from_xy((0.0, 0.0), (1.0, 0.0), (0.0, 1.0));
        let c = tri.centroid();
        assert!((c.x - 1.0 / 3.0).abs() < 1e-12);
        assert!((c.y - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(c.z, 0.0);
    }

    #[test]
    fn from_xy_sets_z_to_zero() {
        let tri = Triangle::from_xy((1.0, 2.0), (3.0, 4.0), (5.0, 6.0));
        assert!(tri.vertices.iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn polygon_stays_closed_under_transform() {
        let p = Point3::new(1.0, 2.0, 0.0);
        let q = Point3::new(3.0, 0.0, 0.0);
        let r = Point3::new(0.0, 4.0, 0.0);
        let mut poly = Element::Polygon(vec![p, q, r, p]);

        poly.scale_mut(2.5);
        poly.translate_mut(&Vector3::new(-1.0, 0.5, 3.0));

        match poly {
            Element::Polygon(points) => {
                assert_eq!(points.len(), 4);
                assert_eq!(points[0], points[3]);
            }
            other => panic!("expected polygon, got {other:?}"),
        }
    }

    #[test]
    fn line_translate_adds_offset_to_both_endpoints() {
        let mut line = Element::Line(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        line.translate_mut(&Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(
            line,
            Element::Line(Point3::new(0.0, 0.0, 5.0), Point3::new(1.0, 1.0, 6.0))
        );
    }
}
