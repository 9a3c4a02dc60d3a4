//! Property 1: Equivalence with a sequential Kruskal oracle.
//!
//! For any generated input graph, verifies that the heap-driven Prim
//! implementation produces a forest with the same total weight, edge
//! count, and component count as the trusted oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::spanning::minimum_spanning_forest;

use super::helpers::build_graph;
use super::oracle::sequential_kruskal;
use super::types::GraphFixture;

/// Relative tolerance for total-weight comparison.
///
/// Prim and Kruskal accept edges in different orders, so the two `f64`
/// sums can differ by accumulated rounding even when the edge sets
/// match exactly.
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = build_graph(fixture);

    let forest = minimum_spanning_forest(&graph).map_err(|e| {
        TestCaseError::fail(format!(
            "minimum_spanning_forest failed: {e} (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        ))
    })?;

    let oracle = sequential_kruskal(fixture.vertex_count, &fixture.edges);

    if !weights_match(forest.total_weight(), oracle.total_weight) {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: prim={}, oracle={} \
             (distribution={:?}, vertices={}, edges={})",
            forest.total_weight(),
            oracle.total_weight,
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }

    if forest.edge_count() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: prim={}, oracle={} \
             (distribution={:?}, vertices={}, edges={})",
            forest.edge_count(),
            oracle.edge_count,
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }

    if forest.component_count() != oracle.component_count {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: prim={}, oracle={} \
             (distribution={:?}, vertices={}, edges={})",
            forest.component_count(),
            oracle.component_count,
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }

    Ok(())
}

/// Compares totals under a relative tolerance scaled to the magnitude
/// of the larger sum.
fn weights_match(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= WEIGHT_TOLERANCE * scale
}
