//! Shared helper functions for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::Edge;

use super::types::MstFixture;

/// Path-halving find over a plain parent array, independent of
/// [`crate::DisjointSet`].
pub(super) fn find_root(parent: &mut [usize], mut vertex: usize) -> usize {
    while parent[vertex] != vertex {
        parent[vertex] = parent[parent[vertex]];
        vertex = parent[vertex];
    }
    vertex
}

/// Sums edge weights in `i128` so no generated input can overflow.
pub(super) fn total_weight(edges: &[Edge]) -> i128 {
    edges.iter().map(|edge| i128::from(edge.weight())).sum()
}

/// Counts connected components of the raw input graph.
pub(super) fn count_input_components(fixture: &MstFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut components = fixture.vertex_count;

    for edge in &fixture.edges {
        let ra = find_root(&mut parent, edge.source());
        let rb = find_root(&mut parent, edge.destination());
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }

    components
}

/// Wraps a failure message with the fixture context.
pub(super) fn fixture_failure(fixture: &MstFixture, message: &str) -> TestCaseError {
    TestCaseError::fail(format!(
        "{message} (distribution={:?}, vertices={}, edges={})",
        fixture.distribution,
        fixture.vertex_count,
        fixture.edges.len(),
    ))
}
