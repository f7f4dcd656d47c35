//! Benchmark parameter types, rendered as Criterion benchmark identifiers.

use std::fmt;

/// Parameters for a single-graph Kruskal benchmark run.
#[derive(Clone, Debug)]
pub struct KruskalBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Largest edge weight; small values produce many ties.
    pub max_weight: i64,
}

impl fmt::Display for KruskalBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},k={},w={}",
            self.vertex_count, self.extra_edges_per_vertex, self.max_weight
        )
    }
}

/// Parameters for a batched benchmark over independent graphs.
#[derive(Clone, Debug)]
pub struct BatchBenchParams {
    /// Number of graphs in the batch.
    pub graph_count: usize,
    /// Number of vertices in each graph.
    pub vertex_count: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "graphs={},n={}", self.graph_count, self.vertex_count)
    }
}
