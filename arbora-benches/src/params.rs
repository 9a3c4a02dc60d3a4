//! Benchmark parameter types.

use std::fmt;

/// Parameters for a spanning forest benchmark run.
#[derive(Clone, Debug)]
pub struct SpanningBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges in the graph.
    pub edge_count: usize,
}

impl fmt::Display for SpanningBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}
