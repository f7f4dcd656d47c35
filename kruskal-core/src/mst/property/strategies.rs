//! Strategy builders for MST property-based tests.
//!
//! Provides graph generation strategies that produce varied weight
//! distributions and topologies. Each generator is driven by a seeded
//! [`SmallRng`] so failing cases can be replayed from their seed.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs (kept smaller to avoid quadratic
/// edge explosion).
const DENSE_MAX_VERTICES: usize = 24;

/// Generates MST fixtures covering every weight distribution.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
///
/// Useful for targeted rstest cases where the distribution is chosen
/// explicitly rather than sampled by proptest.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Negative => generate_negative(rng),
    }
}

// ── Probabilistic graph helper ──────────────────────────────────────────

/// Parameters that vary between the probabilistic generators.
struct ProbabilisticGraphConfig {
    /// Upper bound for the random vertex count (inclusive).
    max_vertices: usize,
    /// Inclusive range from which the per-pair edge probability is sampled.
    edge_prob_range: (f64, f64),
    /// Weight distribution label for the resulting fixture.
    distribution: WeightDistribution,
}

/// Adds each unordered vertex pair with a sampled probability, weighting it
/// with `weight_generator`. Endpoint order is randomised.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    config: ProbabilisticGraphConfig,
    mut weight_generator: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=config.max_vertices);
    let edge_probability: f64 = rng.gen_range(config.edge_prob_range.0..=config.edge_prob_range.1);
    let mut edges = Vec::new();

    for (i, j) in all_pairs(0, vertex_count) {
        if rng.gen_bool(edge_probability) {
            let weight = weight_generator(rng);
            edges.push(oriented_edge(i, j, weight, rng));
        }
    }

    if edges.is_empty() {
        let weight = weight_generator(rng);
        edges.push(Edge::new(0, 1, weight));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: config.distribution,
    }
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Generates a graph whose edge weights are a permutation of distinct
/// values, so exactly one MST exists.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let mut fixture = generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Unique,
        },
        |_| 0,
    );

    let mut weights: Vec<i64> = (1..=as_weight(fixture.edges.len())).collect();
    weights.shuffle(rng);
    fixture.edges = fixture
        .edges
        .iter()
        .zip(weights)
        .map(|(edge, weight)| Edge::new(edge.source(), edge.destination(), weight * 3))
        .collect();
    fixture
}

// ── Many identical weights ──────────────────────────────────────────────

/// Generates a graph where large groups of edges share the same weight.
///
/// Many different spanning trees are then optimal, which stresses the
/// tie-handling of the stable sort.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let weight_pool_size = rng.gen_range(1..=3);
    let weight_pool: Vec<i64> = (0..weight_pool_size)
        .map(|_| rng.gen_range(1..=10))
        .collect();

    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.3, 0.7),
            distribution: WeightDistribution::ManyIdentical,
        },
        move |r| weight_pool[r.gen_range(0..weight_pool.len())],
    )
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// Generates a sparse connected graph: a random spanning path plus roughly
/// `0.5n` to `n` extra edges. Extras may be self-loops or parallel edges.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..vertex_count).collect();
    perm.shuffle(rng);
    for pair in perm.windows(2) {
        let weight = rng.gen_range(1..=1_000);
        edges.push(Edge::new(pair[0], pair[1], weight));
    }

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        let weight = rng.gen_range(1..=1_000);
        edges.push(Edge::new(i, j, weight));
    }

    edges.shuffle(rng);
    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Generates a dense graph approaching a complete graph, with the vertex
/// count capped at [`DENSE_MAX_VERTICES`].
fn generate_dense(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: DENSE_MAX_VERTICES,
            edge_prob_range: (0.7, 0.95),
            distribution: WeightDistribution::Dense,
        },
        |r| r.gen_range(1..=1_000),
    )
}

// ── Negative ────────────────────────────────────────────────────────────

/// Generates a graph whose weights straddle zero.
fn generate_negative(rng: &mut SmallRng) -> MstFixture {
    generate_probabilistic_graph(
        rng,
        ProbabilisticGraphConfig {
            max_vertices: MAX_VERTICES,
            edge_prob_range: (0.2, 0.6),
            distribution: WeightDistribution::Negative,
        },
        |r| r.gen_range(-50..=50),
    )
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Generates a graph with 2-5 components, each having random internal
/// structure. No cross-component edges are created.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let component_sizes: Vec<usize> = (0..component_count)
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count: usize = component_sizes.iter().sum();
    let mut edges = Vec::new();
    let mut vertex_offset = 0;

    for &size in &component_sizes {
        generate_component(&mut edges, vertex_offset, size, rng);
        vertex_offset += size;
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Generates the edges of one component, guaranteeing at least one edge
/// when the component has two or more vertices.
fn generate_component(edges: &mut Vec<Edge>, vertex_offset: usize, size: usize, rng: &mut SmallRng) {
    let edge_probability: f64 = rng.gen_range(0.3..=0.8);
    let start_len = edges.len();

    for (s, t) in all_pairs(vertex_offset, size) {
        if rng.gen_bool(edge_probability) {
            let weight = rng.gen_range(1..=1_000);
            edges.push(oriented_edge(s, t, weight, rng));
        }
    }

    if size >= 2 && edges.len() == start_len {
        let weight = rng.gen_range(1..=1_000);
        edges.push(Edge::new(vertex_offset, vertex_offset + 1, weight));
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns all unique undirected pairs `(vertex_offset + i, vertex_offset + j)`
/// where `i < j < size`.
fn all_pairs(vertex_offset: usize, size: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..size {
        for j in (i + 1)..size {
            pairs.push((vertex_offset + i, vertex_offset + j));
        }
    }
    pairs
}

/// Builds an edge between `a` and `b` with a random endpoint order.
fn oriented_edge(a: usize, b: usize, weight: i64, rng: &mut SmallRng) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}

fn as_weight(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
