use crate::error::{OperationError, Result};
use crate::math::Point2;
use crate::triangulation::Edge;

use super::UnionFind;

/// Selects a minimum spanning forest from a set of candidate edges using
/// Kruskal's algorithm.
///
/// Candidates are weighted by the Euclidean distance between their endpoints.
/// Equal weights keep their input order.
pub struct Kruskal<'a> {
    points: &'a [Point2],
    candidates: &'a [Edge],
}

impl<'a> Kruskal<'a> {
    /// Creates a new `Kruskal` operation.
    #[must_use]
    pub fn new(points: &'a [Point2], candidates: &'a [Edge]) -> Self {
        Self { points, candidates }
    }

    /// Executes the selection, returning the chosen edges in ascending
    /// weight order.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::EdgeOutOfRange` if a candidate references a
    /// point index outside `points`.
    pub fn execute(&self) -> Result<Vec<Edge>> {
        let mut weighted = Vec::with_capacity(self.candidates.len());
        for &edge in self.candidates {
            weighted.push((edge_weight(self.points, edge)?, edge));
        }
        // Stable sort, so ties stay in input order
        weighted.sort_by(|x, y| x.0.total_cmp(&y.0));

        let mut sets = UnionFind::new(self.points.len());
        let tree: Vec<Edge> = weighted
            .into_iter()
            .filter(|(_, edge)| sets.union(edge.a(), edge.b()))
            .map(|(_, edge)| edge)
            .collect();

        tracing::trace!(
            candidates = self.candidates.len(),
            selected = tree.len(),
            "spanning tree built"
        );
        Ok(tree)
    }
}

/// Sums the lengths of `edges`.
///
/// # Errors
///
/// Returns `OperationError::EdgeOutOfRange` if an edge references a point
/// index outside `points`.
pub fn total_weight(points: &[Point2], edges: &[Edge]) -> Result<f64> {
    edges.iter().map(|&e| edge_weight(points, e)).sum()
}

fn edge_weight(points: &[Point2], edge: Edge) -> Result<f64> {
    let weight = edge.length(points).ok_or(OperationError::EdgeOutOfRange {
        a: edge.a(),
        b: edge.b(),
        len: points.len(),
    })?;
    Ok(weight)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::DungeonError;
    use crate::triangulation::{ExtractEdges, Triangulate};

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn square() -> Vec<Point2> {
        vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]
    }

    fn complete_graph(n: usize) -> Vec<Edge> {
        (0..n)
            .flat_map(|a| (a + 1..n).map(move |b| Edge::new(a, b)))
            .collect()
    }

    /// Replays the edges through a fresh union-find; any merge failure is a cycle.
    fn is_forest(n: usize, edges: &[Edge]) -> bool {
        let mut uf = UnionFind::new(n);
        edges.iter().all(|e| uf.union(e.a(), e.b()))
    }

    #[test]
    fn empty_candidates() {
        let pts = square();
        assert!(Kruskal::new(&pts, &[]).execute().unwrap().is_empty());
    }

    #[test]
    fn unit_square_skips_diagonal() {
        let pts = square();
        let tris = Triangulate::new(&pts).execute();
        let edges = ExtractEdges::new(&tris).execute();
        let tree = Kruskal::new(&pts, &edges).execute().unwrap();

        assert_eq!(tree.len(), 3);
        assert!(!tree.contains(&Edge::new(0, 2)));
        assert_relative_eq!(total_weight(&pts, &tree).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn ties_keep_input_order() {
        let pts = square();
        let candidates = [Edge::new(2, 3), Edge::new(0, 1), Edge::new(1, 2), Edge::new(0, 3)];
        let tree = Kruskal::new(&pts, &candidates).execute().unwrap();
        assert_eq!(tree, vec![Edge::new(2, 3), Edge::new(0, 1), Edge::new(1, 2)]);
    }

    #[test]
    fn complete_graph_gives_spanning_tree() {
        let pts = vec![
            p(0.0, 0.0),
            p(3.0, 1.0),
            p(-2.0, 4.0),
            p(5.0, 5.0),
            p(1.0, -3.0),
            p(2.5, 2.5),
        ];
        let candidates = complete_graph(pts.len());
        let tree = Kruskal::new(&pts, &candidates).execute().unwrap();

        assert_eq!(tree.len(), pts.len() - 1);
        assert!(is_forest(pts.len(), &tree));
    }

    #[test]
    fn weight_not_above_any_spanning_subset() {
        // Brute force every 4-edge subset of K5 that forms a spanning tree
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0), p(0.0, 3.0), p(2.0, 1.5)];
        let candidates = complete_graph(pts.len());
        let best = total_weight(&pts, &Kruskal::new(&pts, &candidates).execute().unwrap()).unwrap();

        let m = candidates.len();
        for mask in 0u32..(1 << m) {
            if mask.count_ones() != 4 {
                continue;
            }
            let subset: Vec<Edge> = (0..m)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| candidates[i])
                .collect();
            if is_forest(pts.len(), &subset) {
                assert!(best <= total_weight(&pts, &subset).unwrap() + 1e-12);
            }
        }
    }

    #[test]
    fn disconnected_candidates_give_forest() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(10.0, 0.0), p(11.0, 0.0), p(50.0, 50.0)];
        let candidates = [Edge::new(0, 1), Edge::new(2, 3)];
        let tree = Kruskal::new(&pts, &candidates).execute().unwrap();
        // 4 touched points, 2 components
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn out_of_range_edge_is_rejected() {
        let pts = square();
        let result = Kruskal::new(&pts, &[Edge::new(0, 9)]).execute();
        assert!(result.is_err());
    }

    #[test]
    fn total_weight_rejects_out_of_range_edge() {
        let pts = square();
        assert_relative_eq!(total_weight(&pts, &[]).unwrap(), 0.0);
        let result = total_weight(&pts, &[Edge::new(0, 1), Edge::new(2, 9)]);
        assert!(matches!(
            result,
            Err(DungeonError::Operation(OperationError::EdgeOutOfRange { a: 2, b: 9, len: 4 }))
        ));
    }
}
