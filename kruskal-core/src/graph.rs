//! Weighted undirected graph types consumed by the MST builder.

use std::fmt;

use crate::error::{MstError, Result};
use crate::mst::{MinimumSpanningForest, kruskal};

/// Identifier of a vertex: an index in `[0, vertex_count)`.
pub type VertexId = usize;

/// An undirected weighted edge.
///
/// The weight may be any totally ordered type; only relative order matters,
/// so zero and negative weights are accepted.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge<W = i64> {
    source: VertexId,
    destination: VertexId,
    weight: W,
}

impl<W> Edge<W> {
    /// Creates an edge between `source` and `destination`.
    #[must_use]
    pub const fn new(source: VertexId, destination: VertexId, weight: W) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Returns the first endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> VertexId { self.source }

    /// Returns the second endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> VertexId { self.destination }

    /// Returns both endpoints as `(source, destination)`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn endpoints(&self) -> (VertexId, VertexId) { (self.source, self.destination) }

    /// Returns `true` when both endpoints are the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl<W: Copy> Edge<W> {
    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> W { self.weight }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} : {}", self.source, self.destination, self.weight)
    }
}

/// A vertex count together with the edges connecting those vertices.
///
/// Vertices exist implicitly as the indices `0..vertex_count`. The graph owns
/// its edge sequence and is never mutated by the MST computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph<W = i64> {
    vertex_count: usize,
    edges: Vec<Edge<W>>,
}

impl<W> Graph<W> {
    /// Creates a graph from a vertex count and an edge list.
    ///
    /// No validation happens here; see [`Graph::validate`].
    #[must_use]
    pub fn new(vertex_count: usize, edges: Vec<Edge<W>>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Checks that the graph has at least one vertex and that every edge
    /// endpoint lies in `[0, vertex_count)`.
    ///
    /// # Errors
    ///
    /// Returns [`MstError::EmptyGraph`] or [`MstError::VertexOutOfRange`].
    pub fn validate(&self) -> Result<()> {
        validate_edges(self.vertex_count, &self.edges)
    }
}

impl<W: Ord + Copy> Graph<W> {
    /// Computes the minimum spanning forest of this graph with [`kruskal`].
    ///
    /// # Errors
    ///
    /// Returns an error when [`Graph::validate`] would.
    pub fn minimum_spanning_forest(&self) -> Result<MinimumSpanningForest<W>> {
        kruskal(self.vertex_count, &self.edges)
    }
}

impl Graph<i64> {
    /// Returns the four-vertex reference graph whose MST weighs 19.
    ///
    /// ```
    /// use kruskal_core::Graph;
    ///
    /// let forest = Graph::sample().minimum_spanning_forest()?;
    /// assert_eq!(forest.total_weight(), 19);
    /// # Ok::<(), kruskal_core::MstError>(())
    /// ```
    #[must_use]
    pub fn sample() -> Self {
        Self::new(
            4,
            vec![
                Edge::new(0, 1, 10),
                Edge::new(0, 2, 6),
                Edge::new(0, 3, 5),
                Edge::new(1, 3, 15),
                Edge::new(2, 3, 4),
            ],
        )
    }
}

pub(crate) fn validate_edges<W>(vertex_count: usize, edges: &[Edge<W>]) -> Result<()> {
    if vertex_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    for (edge_index, edge) in edges.iter().enumerate() {
        for vertex in [edge.source, edge.destination] {
            if vertex >= vertex_count {
                return Err(MstError::VertexOutOfRange {
                    edge_index,
                    vertex,
                    vertex_count,
                });
            }
        }
    }
    Ok(())
}
