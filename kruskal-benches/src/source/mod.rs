//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random spanning tree is laid down
//! first, then extra random edges are added. Extra edges may be self-loops
//! or parallel edges, which the MST builder has to reject.

use kruskal_core::{Edge, Graph};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur while generating synthetic graphs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The requested maximum weight was below one.
    #[error("maximum weight must be at least 1, got {max_weight}")]
    InvalidMaxWeight {
        /// The configured maximum weight.
        max_weight: i64,
    },
    /// The requested edge count does not fit in memory addressing.
    #[error("edge count overflows usize for {vertex_count} vertices")]
    EdgeCountOverflow {
        /// The configured vertex count.
        vertex_count: usize,
    },
}

/// Configuration for a synthetic connected graph.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges per vertex beyond the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Weights are drawn uniformly from `1..=max_weight`.
    pub max_weight: i64,
    /// Seed for the random number generator.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Total number of edges a generated graph will hold.
    ///
    /// # Errors
    /// Returns [`SyntheticError::EdgeCountOverflow`] when the count does not
    /// fit in `usize`.
    pub const fn edge_count(&self) -> Result<usize, SyntheticError> {
        let tree_edges = self.vertex_count.saturating_sub(1);
        match self.vertex_count.checked_mul(self.extra_edges_per_vertex) {
            Some(extra) => match tree_edges.checked_add(extra) {
                Some(total) => Ok(total),
                None => Err(SyntheticError::EdgeCountOverflow {
                    vertex_count: self.vertex_count,
                }),
            },
            None => Err(SyntheticError::EdgeCountOverflow {
                vertex_count: self.vertex_count,
            }),
        }
    }

    const fn validate(&self) -> Result<(), SyntheticError> {
        if self.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if self.max_weight < 1 {
            return Err(SyntheticError::InvalidMaxWeight {
                max_weight: self.max_weight,
            });
        }
        Ok(())
    }
}

/// Generates a connected graph from `config`.
///
/// The same configuration always yields the same graph. Edge order is
/// shuffled so the input is not already sorted by construction.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
///
/// # Examples
/// ```
/// use kruskal_benches::source::{SyntheticGraphConfig, generate_connected_graph};
///
/// let graph = generate_connected_graph(&SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges_per_vertex: 2,
///     max_weight: 100,
///     seed: 7,
/// })?;
/// assert_eq!(graph.edges().len(), 29);
/// # Ok::<(), kruskal_benches::source::SyntheticError>(())
/// ```
pub fn generate_connected_graph(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity(config.edge_count()?);

    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        let weight = rng.gen_range(1..=config.max_weight);
        edges.push(Edge::new(parent, vertex, weight));
    }

    let extra = config.vertex_count.saturating_mul(config.extra_edges_per_vertex);
    for _ in 0..extra {
        let source = rng.gen_range(0..config.vertex_count);
        let destination = rng.gen_range(0..config.vertex_count);
        let weight = rng.gen_range(1..=config.max_weight);
        edges.push(Edge::new(source, destination, weight));
    }

    edges.shuffle(&mut rng);
    Ok(Graph::new(config.vertex_count, edges))
}
