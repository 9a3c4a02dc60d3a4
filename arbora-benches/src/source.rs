//! Synthetic graph generation for benchmarks.
//!
//! Produces seeded random graphs so benchmark runs are reproducible
//! across machines and invocations.

use arbora_core::{AdjacencyList, Graph, GraphError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Total number of edges to generate, including the spanning tree.
    pub edge_count: usize,
    /// RNG seed for reproducible generation.
    pub seed: u64,
}

/// Generates a connected random graph from the configuration.
///
/// A random spanning tree guarantees connectivity; additional random
/// edges bring the graph up to the requested edge count. Weights are
/// uniform in `[0, 100)`.
///
/// # Errors
/// Returns [`GraphError`] if an edge endpoint falls out of bounds,
/// which indicates a bug in the generator rather than bad input.
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<AdjacencyList, GraphError> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let n = config.vertex_count;
    let mut graph = AdjacencyList::with_vertices(n);

    for vertex in 1..n {
        let attach = rng.gen_range(0..vertex);
        graph.add_edge(attach, vertex, rng.gen_range(0.0_f64..100.0))?;
    }

    while graph.edge_count() < config.edge_count {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i != j {
            graph.add_edge(i, j, rng.gen_range(0.0_f64..100.0))?;
        }
    }

    Ok(graph)
}
