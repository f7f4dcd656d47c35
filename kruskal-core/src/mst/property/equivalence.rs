//! Property 1: Equivalence with the Prim oracle.
//!
//! For any generated input graph, verifies that Kruskal produces a forest
//! with the same total weight, edge count, and component count as an
//! independent Prim's-algorithm implementation.

use proptest::test_runner::TestCaseResult;

use crate::kruskal;

use super::helpers::{fixture_failure, total_weight};
use super::oracle::prim_forest;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let forest = kruskal(fixture.vertex_count, &fixture.edges)
        .map_err(|e| fixture_failure(fixture, &format!("kruskal failed: {e}")))?;

    let oracle = prim_forest(fixture.vertex_count, &fixture.edges);
    let kruskal_weight = total_weight(forest.edges());

    if kruskal_weight != oracle.total_weight {
        return Err(fixture_failure(
            fixture,
            &format!(
                "total weight mismatch: kruskal={kruskal_weight}, oracle={}",
                oracle.total_weight,
            ),
        ));
    }

    if forest.edges().len() != oracle.edge_count {
        return Err(fixture_failure(
            fixture,
            &format!(
                "edge count mismatch: kruskal={}, oracle={}",
                forest.edges().len(),
                oracle.edge_count,
            ),
        ));
    }

    if forest.component_count() != oracle.component_count {
        return Err(fixture_failure(
            fixture,
            &format!(
                "component count mismatch: kruskal={}, oracle={}",
                forest.component_count(),
                oracle.component_count,
            ),
        ));
    }

    Ok(())
}
