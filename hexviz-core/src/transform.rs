//! Triangle outlining and uniform transforms over element lists.

use nalgebra::Vector3;

use crate::geometry::{Element, Triangle};

/// How a triangle becomes drawable primitives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineMode {
    /// Three line segments per triangle.
    Lines,
    /// One closed polygon per triangle.
    Polygons,
}

impl OutlineMode {
    /// Elements produced per input triangle.
    pub fn elements_per_triangle(self) -> usize {
        match self {
            OutlineMode::Lines => 3,
            OutlineMode::Polygons => 1,
        }
    }
}

/// Convert triangles to primitives, preserving input order.
///
/// `Lines` yields the segments p1→p2, p2→p3, p3→p1 for each triangle;
/// `Polygons` yields one closed polygon (first point repeated at the end).
pub fn outline(triangles: &[Triangle], mode: OutlineMode) -> Vec<Element> {
    let mut elements = Vec::with_capacity(triangles.len() * mode.elements_per_triangle());
    for triangle in triangles {
        let [a, b, c] = triangle.vertices;
        match mode {
            OutlineMode::Lines => {
                elements.push(Element::Line(a, b));
                elements.push(Element::Line(b, c));
                elements.push(Element::Line(c, a));
            }
            OutlineMode::Polygons => {
                elements.push(Element::Polygon(vec![a, b, c, a]));
            }
        }
    }
    elements
}

/// Uniform scale: every coordinate of every element is multiplied by
/// `factor`. Ordering is untouched.
pub fn scale(elements: &mut [Element], factor: f64) {
    for element in elements.iter_mut() {
        element.scale_mut(factor);
    }
}

/// Uniform offset added to every point of every element.
pub fn translate(elements: &mut [Element], offset: &Vector3<f64>) {
    for element in elements.iter_mut() {
        element.translate_mut(offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn sample(n: usize) -> Vec<Triangle> {
        (0..n)
            .map(|i| {
                let x = i as f64;
                Triangle::from_xy((x, 0.0), (x + 1.0, 0.0), (x, 1.0))
            })
            .collect()
    }

    #[test]
    fn lines_mode_yields_three_per_triangle() {
        for n in [0, 1, 7, 126] {
            assert_eq!(outline(&sample(n), OutlineMode::Lines).len(), 3 * n);
        }
    }

    #[test]
    fn polygons_mode_yields_one_per_triangle() {
        for n in [0, 1, 7, 126] {
            assert_eq!(outline(&sample(n), OutlineMode::Polygons).len(), n);
        }
    }

    #[test]
    fn outline_preserves_input_order() {
        let elements = outline(&sample(3), OutlineMode::Lines);
        // First segment of triangle i starts at x = i.
        for i in 0..3 {
            match &elements[i * 3] {
                Element::Line(a, _) => assert_eq!(a.x, i as f64),
                other => panic!("expected line, got {other:?}"),
            }
        }
    }

    #[test]
    fn scale_ten_is_exact_on_the_sample_triangle() {
        let tris = vec![Triangle::from_xy((0.0, 0.0), (1.0, 0.0), (0.0, 1.0))];
        let mut elements = outline(&tris, OutlineMode::Polygons);
        scale(&mut elements, 10.0);

        let expected = Element::Polygon(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ]);
        assert_eq!(elements, vec![expected]);
    }

    #[test]
    fn scale_multiplies_every_coordinate_and_keeps_order() {
        let mut elements = outline(&sample(4), OutlineMode::Lines);
        let before = elements.clone();
        scale(&mut elements, 2.0);

        assert_eq!(elements.len(), before.len());
        for (scaled, original) in elements.iter().zip(&before) {
            match (scaled, original) {
                (Element::Line(a, b), Element::Line(a0, b0)) => {
                    assert_eq!(a.coords, a0.coords * 2.0);
                    assert_eq!(b.coords, b0.coords * 2.0);
                }
                other => panic!("unexpected element pair {other:?}"),
            }
        }
    }

    #[test]
    fn translate_offsets_every_element() {
        let mut elements = outline(&sample(2), OutlineMode::Polygons);
        translate(&mut elements, &Vector3::new(0.0, 0.0, 5.0));
        for element in &elements {
            match element {
                Element::Polygon(points) => assert!(points.iter().all(|p| p.z == 5.0)),
                other => panic!("expected polygon, got {other:?}"),
            }
        }
    }
}
