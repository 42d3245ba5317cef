//! Room-graph-first connectivity planning.
//!
//! Given room positions, decide which pairs should be linked: triangulate
//! the positions, keep the Delaunay edges as candidate links and reduce them
//! to a minimum spanning tree.

use serde::Serialize;

use crate::error::Result;
use crate::math::Point2;
use crate::placement::{Layout, StructureId};
use crate::spanning::{total_weight, Kruskal};
use crate::triangulation::{Edge, ExtractEdges, Triangle, Triangulate};

/// Candidate and spanning links over a point set.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityPlan {
    /// The planned points, in input order.
    pub points: Vec<Point2>,
    /// Room each point came from, when planned from a layout.
    pub rooms: Vec<StructureId>,
    pub triangles: Vec<Triangle>,
    /// Unique edges of the triangulation.
    pub delaunay_edges: Vec<Edge>,
    /// Minimum spanning subset of `delaunay_edges`.
    pub spanning_edges: Vec<Edge>,
    /// Total length of the spanning edges.
    pub spanning_weight: f64,
}

impl ConnectivityPlan {
    /// Spanning edges as room pairs. Empty when the plan was built from raw
    /// points.
    #[must_use]
    pub fn room_links(&self) -> Vec<(StructureId, StructureId)> {
        self.spanning_edges
            .iter()
            .filter_map(|e| Some((*self.rooms.get(e.a())?, *self.rooms.get(e.b())?)))
            .collect()
    }
}

/// Builds a [`ConnectivityPlan`] by triangulating points and taking the
/// minimum spanning tree of the triangulation's edges.
pub struct PlanConnectivity {
    points: Vec<Point2>,
    rooms: Vec<StructureId>,
}

impl PlanConnectivity {
    /// Plans over raw 2D points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            rooms: Vec::new(),
        }
    }

    /// Plans over the rooms of a layout, projected onto the XZ plane.
    #[must_use]
    pub fn from_layout(layout: &Layout) -> Self {
        let (rooms, points) = layout
            .rooms()
            .map(|(id, room)| {
                let p = room.position();
                (id, Point2::new(p.x, p.z))
            })
            .unzip();
        Self { points, rooms }
    }

    /// Executes the plan.
    ///
    /// Fewer than three points produce no triangles and therefore no edges.
    ///
    /// # Errors
    ///
    /// Returns an error if the spanning tree or its weight is handed an edge
    /// outside the point set, which a triangulation of the same points never
    /// does.
    pub fn execute(&self) -> Result<ConnectivityPlan> {
        let triangles = Triangulate::new(&self.points).execute();
        let delaunay_edges = ExtractEdges::new(&triangles).execute();
        let spanning_edges = Kruskal::new(&self.points, &delaunay_edges).execute()?;
        let spanning_weight = total_weight(&self.points, &spanning_edges)?;

        tracing::debug!(
            points = self.points.len(),
            delaunay = delaunay_edges.len(),
            spanning = spanning_edges.len(),
            "connectivity planned"
        );

        Ok(ConnectivityPlan {
            points: self.points.clone(),
            rooms: self.rooms.clone(),
            triangles,
            delaunay_edges,
            spanning_edges,
            spanning_weight,
        })
    }
}
