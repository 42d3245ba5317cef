use std::collections::BTreeSet;

use super::{Edge, Triangle};

/// Collects the unique undirected edges of a set of triangles.
pub struct ExtractEdges<'a> {
    triangles: &'a [Triangle],
}

impl<'a> ExtractEdges<'a> {
    /// Creates a new `ExtractEdges` operation.
    #[must_use]
    pub fn new(triangles: &'a [Triangle]) -> Self {
        Self { triangles }
    }

    /// Executes the extraction.
    ///
    /// Edges shared by neighbouring triangles appear once. The result is
    /// sorted by `(a, b)`.
    #[must_use]
    pub fn execute(&self) -> Vec<Edge> {
        self.triangles
            .iter()
            .flat_map(Triangle::edges)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
