//! Property 3: Input-order independence and determinism.
//!
//! Shuffling the input edges changes which of several equal-weight edges the
//! stable sort meets first, and therefore possibly which spanning tree is
//! returned. The optimum itself must not move: total weight, edge count, and
//! component count stay identical. Re-running on the very same input must
//! reproduce the exact edge list.

use proptest::test_runner::TestCaseResult;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::kruskal;

use super::helpers::{fixture_failure, total_weight};
use super::types::{MstFixture, OrderingConfig};

/// Runs the order-independence property for the given fixture.
///
/// The number of shuffled permutations is controlled by [`OrderingConfig`].
pub(super) fn run_order_independence_property(fixture: &MstFixture) -> TestCaseResult {
    let config = OrderingConfig::load();

    let baseline = kruskal(fixture.vertex_count, &fixture.edges)
        .map_err(|e| fixture_failure(fixture, &format!("baseline kruskal failed: {e}")))?;
    let baseline_weight = total_weight(baseline.edges());

    let rerun = kruskal(fixture.vertex_count, &fixture.edges)
        .map_err(|e| fixture_failure(fixture, &format!("rerun kruskal failed: {e}")))?;
    if rerun != baseline {
        return Err(fixture_failure(
            fixture,
            "identical input produced a different edge list",
        ));
    }

    for permutation in 0..config.permutations {
        let mut shuffled = fixture.edges.clone();
        let mut rng = SmallRng::seed_from_u64(permutation as u64);
        shuffled.shuffle(&mut rng);

        let forest = kruskal(fixture.vertex_count, &shuffled).map_err(|e| {
            fixture_failure(fixture, &format!("permutation {permutation}: kruskal failed: {e}"))
        })?;

        let weight = total_weight(forest.edges());
        if weight != baseline_weight {
            return Err(fixture_failure(
                fixture,
                &format!(
                    "permutation {permutation}: total weight diverged, \
                     baseline={baseline_weight}, shuffled={weight}"
                ),
            ));
        }

        if forest.edges().len() != baseline.edges().len()
            || forest.component_count() != baseline.component_count()
        {
            return Err(fixture_failure(
                fixture,
                &format!(
                    "permutation {permutation}: shape diverged, baseline=({}, {}), \
                     shuffled=({}, {})",
                    baseline.edges().len(),
                    baseline.component_count(),
                    forest.edges().len(),
                    forest.component_count(),
                ),
            ));
        }
    }

    Ok(())
}
