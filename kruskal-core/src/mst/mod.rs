//! Minimum spanning tree (MST) construction with Kruskal's algorithm.
//!
//! Edges are stable-sorted by weight and consumed in non-decreasing order.
//! A fresh [`DisjointSet`] decides for each edge whether its endpoints are
//! already connected; edges joining two components are accepted, the rest
//! would close a cycle and are rejected. Disconnected input is not an error:
//! the result is then a minimum spanning forest with one tree per component.

use std::iter::Sum;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{Span, debug, field, instrument, trace};

use crate::disjoint_set::DisjointSet;
use crate::error::{MstError, Result};
use crate::graph::{Edge, validate_edges};

#[cfg(feature = "parallel")]
use crate::graph::Graph;

/// The output of a minimum spanning forest computation.
///
/// Edges appear in the order Kruskal accepted them, which is non-decreasing
/// by weight. When the input graph is connected, the forest is a minimum
/// spanning tree with `vertex_count - 1` edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MinimumSpanningForest<W = i64> {
    edges: Vec<Edge<W>>,
    vertex_count: usize,
    component_count: usize,
}

impl<W> MinimumSpanningForest<W> {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge<W>] { &self.edges }

    /// Consumes the forest, returning its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge<W>> { self.edges }

    /// Returns an iterator over the accepted edges.
    pub fn iter(&self) -> std::slice::Iter<'_, Edge<W>> {
        self.edges.iter()
    }

    /// Returns the number of vertices of the input graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the forest unchanged when it is a spanning tree.
    ///
    /// # Errors
    ///
    /// Returns [`MstError::NotConnected`] when the input graph had more than
    /// one connected component.
    pub fn require_spanning_tree(self) -> Result<Self> {
        if self.is_tree() {
            return Ok(self);
        }
        Err(MstError::NotConnected {
            component_count: self.component_count,
            vertex_count: self.vertex_count,
        })
    }
}

impl<W: Copy + Sum<W>> MinimumSpanningForest<W> {
    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> W {
        self.edges.iter().map(Edge::weight).sum()
    }
}

impl<'a, W> IntoIterator for &'a MinimumSpanningForest<W> {
    type Item = &'a Edge<W>;
    type IntoIter = std::slice::Iter<'a, Edge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Computes the MST edge sequence of a graph given as a vertex count and an
/// edge list.
///
/// This is [`kruskal`] without the forest metadata. The caller's edges are
/// only read; the returned sequence is newly allocated.
///
/// # Errors
///
/// Returns [`MstError::EmptyGraph`] when `vertex_count == 0`,
/// [`MstError::VertexOutOfRange`] when an edge references a vertex
/// `>= vertex_count`, and [`MstError::AllocationFailed`] when the
/// union-find arrays cannot be allocated.
pub fn compute_mst<W: Ord + Copy>(vertex_count: usize, edges: &[Edge<W>]) -> Result<Vec<Edge<W>>> {
    kruskal(vertex_count, edges).map(MinimumSpanningForest::into_edges)
}

/// Computes a minimum spanning forest using Kruskal's algorithm.
///
/// All edges are validated before any sorting or union-find work begins.
/// Equal-weight edges are considered in input order, so the selected edge set
/// is deterministic for a given input. Self-loops are always rejected and
/// the scan stops once `vertex_count - 1` edges have been accepted.
///
/// # Errors
///
/// Returns an error when:
/// - `vertex_count == 0`
/// - an edge references a vertex id `>= vertex_count`
/// - union-find storage for `vertex_count` vertices cannot be allocated
#[instrument(
    name = "core.kruskal",
    err,
    skip_all,
    fields(
        vertex_count = vertex_count,
        edge_count = edges.len(),
        accepted = field::Empty,
        rejected = field::Empty,
        component_count = field::Empty,
    ),
)]
pub fn kruskal<W: Ord + Copy>(
    vertex_count: usize,
    edges: &[Edge<W>],
) -> Result<MinimumSpanningForest<W>> {
    if let Err(error) = validate_edges(vertex_count, edges) {
        debug!(code = %error.code(), "rejecting invalid MST input");
        return Err(error);
    }

    let mut components = DisjointSet::try_new(vertex_count).inspect_err(|error| {
        debug!(code = %error.code(), "cannot allocate union-find storage");
    })?;

    let mut order: Vec<&Edge<W>> = edges.iter().collect();
    order.sort_by_key(|edge| edge.weight());

    let tree_size = vertex_count - 1;
    let mut accepted = Vec::with_capacity(tree_size.min(edges.len()));
    let mut rejected = 0_usize;

    for edge in order {
        if accepted.len() == tree_size {
            break;
        }

        let (source, destination) = edge.endpoints();
        let source_root = components.find(source);
        let destination_root = components.find(destination);
        if source_root == destination_root {
            trace!(
                source,
                destination,
                self_loop = edge.is_self_loop(),
                "edge rejected: endpoints already connected"
            );
            rejected += 1;
            continue;
        }

        accepted.push(*edge);
        components.union(source_root, destination_root);
    }

    let forest = MinimumSpanningForest {
        edges: accepted,
        vertex_count,
        component_count: components.component_count(),
    };

    let span = Span::current();
    span.record("accepted", forest.edges.len());
    span.record("rejected", rejected);
    span.record("component_count", forest.component_count);
    record_run(forest.edges.len(), rejected);

    Ok(forest)
}

/// Computes the minimum spanning forest of each graph in parallel.
///
/// Every graph gets its own [`DisjointSet`]; no state is shared between
/// computations. Results are returned in input order.
#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
#[must_use]
pub fn kruskal_many<W>(graphs: &[Graph<W>]) -> Vec<Result<MinimumSpanningForest<W>>>
where
    W: Ord + Copy + Send + Sync,
{
    graphs
        .par_iter()
        .map(Graph::minimum_spanning_forest)
        .collect()
}

#[cfg(feature = "metrics")]
fn record_run(accepted: usize, rejected: usize) {
    metrics::counter!("kruskal_runs_total").increment(1);
    metrics::counter!("kruskal_edges_accepted_total")
        .increment(u64::try_from(accepted).unwrap_or(u64::MAX));
    metrics::counter!("kruskal_edges_rejected_total")
        .increment(u64::try_from(rejected).unwrap_or(u64::MAX));
}

#[cfg(not(feature = "metrics"))]
const fn record_run(_accepted: usize, _rejected: usize) {}

// ============================================================================
// Kani Formal Verification
// ============================================================================

/// Returns `true` when `edges` form a forest over `vertex_count` vertices
/// with exactly `vertex_count - component_count` edges and no self-loops.
#[cfg(kani)]
pub(crate) fn is_valid_forest<W>(
    vertex_count: usize,
    edges: &[Edge<W>],
    component_count: usize,
) -> bool {
    if edges.len() != vertex_count.saturating_sub(component_count) {
        return false;
    }

    let mut set = DisjointSet::new(vertex_count);
    edges
        .iter()
        .all(|edge| !edge.is_self_loop() && set.union(edge.source(), edge.destination()))
}

#[cfg(kani)]
mod kani_proofs {
    //! Kani proof harnesses for MST structural invariants.

    use super::{Edge, is_valid_forest, kruskal};

    /// Verifies the forest invariants for every subset of the complete graph
    /// on four vertices with arbitrary `u8` weights.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_forest_structure_4_vertices() {
        let vertex_count = 4usize;
        let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

        let mut edges = Vec::new();
        for &(source, destination) in &pairs {
            if kani::any::<bool>() {
                let weight: u8 = kani::any();
                edges.push(Edge::new(source, destination, weight));
            }
        }

        let forest = kruskal(vertex_count, &edges)
            .expect("validated four-vertex input must succeed");

        kani::assert(
            is_valid_forest(vertex_count, forest.edges(), forest.component_count()),
            "MST forest invariant violated",
        );
        if forest.is_tree() {
            kani::assert(
                forest.edges().len() == vertex_count - 1,
                "MST tree should have n-1 edges",
            );
        }
    }
}


#[cfg(test)]
mod property;
