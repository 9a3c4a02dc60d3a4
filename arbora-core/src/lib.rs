//! Arbora core library.
//!
//! Computes minimum spanning trees (forests, for disconnected graphs)
//! of weighted undirected graphs using Prim's vertex-growth algorithm
//! driven by a decrease-key-capable Fibonacci heap, in O(E + V log V).

mod graph;
pub mod heap;
mod index;
mod spanning;

pub use crate::{
    graph::{AdjacencyList, EdgeId, Graph, GraphError},
    heap::{FibonacciHeap, HeapError, HeapErrorCode, HeapHandle},
    index::{IndexingError, VertexIndexing},
    spanning::{
        CancelToken, SpanningError, SpanningErrorCode, SpanningForest, minimum_spanning_forest,
        minimum_spanning_forest_with,
    },
};
