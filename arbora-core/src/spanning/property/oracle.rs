//! Sequential Kruskal oracle for spanning-forest property verification.
//!
//! Provides a simple, trusted implementation of Kruskal's algorithm for
//! use as a reference oracle. Kruskal and Prim agree on total weight,
//! edge count, and component count for any input, which makes the
//! oracle a complete check of the heap-driven implementation.

use std::cmp::Ordering;

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the forest, accumulated as `f64`.
    pub total_weight: f64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components after forest construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal's
/// algorithm over `(source, target, weight)` edges.
///
/// Self-loops are skipped; parallel edges are handled naturally by the
/// union-find acceptance check. The sort is by `total_cmp` on weight
/// with endpoint tie-breaking for determinism.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
) -> OracleResult {
    if vertex_count == 0 || edges.is_empty() {
        return OracleResult {
            total_weight: 0.0,
            edge_count: 0,
            component_count: vertex_count,
        };
    }

    let mut sorted: Vec<(usize, usize, f64)> = edges
        .iter()
        .filter(|&&(source, target, _)| source != target)
        .copied()
        .collect();
    sorted.sort_unstable_by(cmp_edge);

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank: Vec<usize> = vec![0; vertex_count];
    let mut components = vertex_count;
    let mut total_weight = 0.0_f64;
    let mut edge_count = 0_usize;

    for &(source, target, weight) in &sorted {
        let ra = find_root(&mut parent, source);
        let rb = find_root(&mut parent, target);
        if ra != rb {
            union_by_rank(&mut parent, &mut rank, ra, rb);
            total_weight += weight;
            edge_count += 1;
            components -= 1;
        }
    }

    OracleResult {
        total_weight,
        edge_count,
        component_count: components,
    }
}

/// Sort comparator: weight first via `total_cmp`, then endpoints.
fn cmp_edge(a: &(usize, usize, f64), b: &(usize, usize, f64)) -> Ordering {
    a.2.total_cmp(&b.2)
        .then_with(|| a.0.cmp(&b.0))
        .then_with(|| a.1.cmp(&b.1))
}

/// Selects the root and child for a union operation.
///
/// Prefers the vertex with the higher rank; when ranks are equal, the
/// smaller index becomes root to ensure deterministic tie-breaking.
fn choose_root(rank: &[usize], a: usize, b: usize) -> (usize, usize) {
    match rank[a].cmp(&rank[b]) {
        Ordering::Greater => (a, b),
        Ordering::Less => (b, a),
        Ordering::Equal if a <= b => (a, b),
        Ordering::Equal => (b, a),
    }
}

/// Union by rank, breaking ties by smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = choose_root(rank, a, b);
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
