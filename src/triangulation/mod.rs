mod bowyer_watson;
mod edges;

pub use bowyer_watson::Triangulate;
pub use edges::ExtractEdges;

use serde::Serialize;

use crate::math::{distance, Point2};

/// An undirected edge between two point indices.
///
/// Endpoints are normalized so that `a() <= b()`, which makes equality and
/// hashing independent of the order the edge was discovered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Edge {
    a: usize,
    b: usize,
}

impl Edge {
    /// Creates an edge between points `a` and `b` in either order.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// The smaller endpoint index.
    #[must_use]
    pub fn a(&self) -> usize {
        self.a
    }

    /// The larger endpoint index.
    #[must_use]
    pub fn b(&self) -> usize {
        self.b
    }

    /// Euclidean length of the edge, or `None` if an endpoint is out of range.
    #[must_use]
    pub fn length(&self, points: &[Point2]) -> Option<f64> {
        Some(distance(points.get(self.a)?, points.get(self.b)?))
    }
}

/// A triangle referencing three points by index.
///
/// Vertex order is meaningful: triangles produced by [`Triangulate`] are
/// counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Triangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Triangle {
    /// Creates a triangle from three point indices.
    #[must_use]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// The three sides in traversal order, keeping their direction.
    #[must_use]
    pub fn directed_edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// The three sides as undirected edges.
    #[must_use]
    pub fn edges(&self) -> [Edge; 3] {
        self.directed_edges().map(|(a, b)| Edge::new(a, b))
    }

    /// Returns `true` if any corner references point `index`.
    #[must_use]
    pub fn references(&self, index: usize) -> bool {
        self.a == index || self.b == index || self.c == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_is_order_independent() {
        assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
        let e = Edge::new(7, 2);
        assert_eq!((e.a(), e.b()), (2, 7));
    }

    #[test]
    fn edge_length_checks_bounds() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(3.0, 4.0)];
        assert_eq!(Edge::new(0, 1).length(&pts), Some(5.0));
        assert_eq!(Edge::new(0, 2).length(&pts), None);
    }

    #[test]
    fn triangle_sides() {
        let t = Triangle::new(4, 1, 9);
        assert_eq!(t.directed_edges(), [(4, 1), (1, 9), (9, 4)]);
        assert_eq!(t.edges(), [Edge::new(1, 4), Edge::new(1, 9), Edge::new(4, 9)]);
        assert!(t.references(9));
        assert!(!t.references(2));
    }
}
