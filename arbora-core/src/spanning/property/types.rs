//! Type definitions for spanning-forest property tests.

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation,
/// producing inputs that stress different aspects of the heap-driven
/// Prim implementation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight drawn from a continuous range
    /// spanning negative and positive values.
    Unique,
    /// Large groups of edges share identical weights, stressing
    /// tie-breaking in extraction order.
    ManyIdentical,
    /// Sparse connected graph: a random spanning tree plus a handful
    /// of extra edges, maximising decrease-key hits per vertex.
    Sparse,
    /// Dense graph approaching a complete graph, maximising the
    /// relaxations per settled vertex.
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for spanning-forest property tests.
///
/// Captures the vertex count, generated weighted edges, and the
/// distribution used during generation, giving full context for
/// failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated `(source, target, weight)` edges.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
