use std::collections::HashMap;

use slotmap::SlotMap;

use crate::math::{in_circle, Point2};

use super::{Edge, Triangle};

slotmap::new_key_type! {
    /// Handle to a triangle while the triangulation is under construction.
    struct TriangleKey;
}

/// How far the super-triangle extends past the bounding box, as a multiple
/// of the box's larger side.
const SUPER_TRIANGLE_SCALE: f64 = 10.0;

/// Computes a Delaunay triangulation with the Bowyer–Watson algorithm.
///
/// Fewer than three points yield an empty result. Collinear or coincident
/// input is not rejected; it simply produces fewer (or degenerate) triangles.
///
/// The super-triangle is finite, so a thin triangle along the convex hull
/// whose circumcircle reaches a super-triangle corner can be lost with it.
/// Every triangle returned is Delaunay, but the set may be a few hull
/// triangles short of the full triangulation.
pub struct Triangulate<'a> {
    points: &'a [Point2],
}

impl<'a> Triangulate<'a> {
    /// Creates a new `Triangulate` operation over `points`.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the triangulation.
    ///
    /// Returned triangles index into the input slice and are wound
    /// counter-clockwise. Output order is deterministic for a given input.
    #[must_use]
    pub fn execute(&self) -> Vec<Triangle> {
        let n = self.points.len();
        if n < 3 {
            return Vec::new();
        }

        // Super-triangle corners go after the input so input indices are unchanged
        let mut working = self.points.to_vec();
        working.extend(super_triangle(self.points));

        let mut triangles: SlotMap<TriangleKey, Triangle> = SlotMap::with_key();
        triangles.insert(Triangle::new(n, n + 1, n + 2));

        for (i, p) in self.points.iter().enumerate() {
            let bad: Vec<TriangleKey> = triangles
                .iter()
                .filter(|(_, t)| in_circle(&working[t.a], &working[t.b], &working[t.c], p))
                .map(|(key, _)| key)
                .collect();

            let removed: Vec<Triangle> = bad
                .into_iter()
                .filter_map(|key| triangles.remove(key))
                .collect();

            for (a, b) in hole_boundary(&removed) {
                triangles.insert(Triangle::new(a, b, i));
            }
        }

        let result: Vec<Triangle> = triangles
            .values()
            .copied()
            .filter(|t| t.a < n && t.b < n && t.c < n)
            .collect();

        tracing::trace!(points = n, triangles = result.len(), "triangulated");
        result
    }
}

/// Builds a counter-clockwise triangle enclosing every point.
fn super_triangle(points: &[Point2]) -> [Point2; 3] {
    let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
    let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    let delta = (max_x - min_x).max(max_y - min_y) * SUPER_TRIANGLE_SCALE;

    [
        Point2::new(min_x - 1.0, min_y - 1.0),
        Point2::new(max_x + delta, min_y - 1.0),
        Point2::new(min_x - 1.0, max_y + delta),
    ]
}

/// Returns the directed sides of the removed triangles that are not shared
/// between two of them, i.e. the outline of the polygonal hole.
///
/// Sides keep the direction they had in their triangle, so joining each one
/// to the inserted point preserves the winding.
fn hole_boundary(removed: &[Triangle]) -> Vec<(usize, usize)> {
    let mut counts: HashMap<Edge, usize> = HashMap::new();
    for t in removed {
        for e in t.edges() {
            *counts.entry(e).or_insert(0) += 1;
        }
    }

    removed
        .iter()
        .flat_map(Triangle::directed_edges)
        .filter(|&(a, b)| counts.get(&Edge::new(a, b)) == Some(&1))
        .collect()
}
