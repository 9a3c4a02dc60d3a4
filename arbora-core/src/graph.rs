//! Graph abstractions consumed by the spanning-forest core.
//!
//! The algorithm never stores a graph of its own; it reads one through
//! the [`Graph`] trait. Vertices are dense indices `0..vertex_count()`
//! and edges are opaque [`EdgeId`]s, so any adjacency representation
//! can back the trait. [`AdjacencyList`] is the bundled implementation.

use thiserror::Error;

/// Opaque identifier of an edge within one graph.
///
/// # Examples
/// ```
/// use arbora_core::EdgeId;
///
/// let id = EdgeId::new(3);
/// assert_eq!(id.get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Creates an edge identifier from its dense index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn new(id: usize) -> Self { Self(id) }

    /// Returns the underlying dense index.
    #[rustfmt::skip]
    #[must_use]
    pub const fn get(self) -> usize { self.0 }
}

/// An error produced while constructing an [`AdjacencyList`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint referenced a vertex outside `0..vertex_count`.
    #[error("vertex {vertex} is out of bounds (vertex_count is {vertex_count})")]
    VertexOutOfBounds {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}

/// Read-only capability over a finite weighted undirected graph.
///
/// Implementations expose dense vertex indices; callers holding opaque
/// vertex labels normalise them first (see
/// [`VertexIndexing`](crate::VertexIndexing)). The spanning core never
/// mutates the graph and never retains references past one call.
///
/// # Examples
/// ```
/// use arbora_core::{AdjacencyList, Graph};
///
/// let mut graph = AdjacencyList::with_vertices(2);
/// let edge = graph.add_edge(0, 1, 2.5)?;
/// assert_eq!(graph.opposite(edge, 0), 1);
/// assert_eq!(graph.weight(edge), 2.5);
/// # Ok::<(), arbora_core::GraphError>(())
/// ```
pub trait Graph {
    /// Returns the number of vertices; valid indices are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges.
    fn edge_count(&self) -> usize;

    /// Enumerates the edges incident to `vertex`, in any order.
    ///
    /// Self-loops appear once; parallel edges appear individually.
    fn incident_edges(&self, vertex: usize) -> impl Iterator<Item = EdgeId> + '_;

    /// Returns both endpoints of `edge` in storage order.
    fn endpoints(&self, edge: EdgeId) -> (usize, usize);

    /// Returns the endpoint of `edge` opposite to `vertex`.
    ///
    /// For a self-loop both endpoints coincide and `vertex` is returned.
    fn opposite(&self, edge: EdgeId, vertex: usize) -> usize {
        let (source, target) = self.endpoints(edge);
        if vertex == source { target } else { source }
    }

    /// Returns the weight of `edge`.
    ///
    /// Weights may be negative or zero; the spanning core rejects
    /// non-finite values at use time.
    fn weight(&self, edge: EdgeId) -> f64;
}

/// Stored endpoints and weight of one undirected edge.
#[derive(Debug, Clone, Copy, PartialEq)]
struct StoredEdge {
    source: usize,
    target: usize,
    weight: f64,
}

/// Adjacency-list graph with a fixed vertex set and incremental edges.
///
/// # Examples
/// ```
/// use arbora_core::{AdjacencyList, Graph};
///
/// let mut graph = AdjacencyList::with_vertices(3);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(1, 2, 2.0)?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.incident_edges(1).count(), 2);
/// # Ok::<(), arbora_core::GraphError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyList {
    incidence: Vec<Vec<EdgeId>>,
    edges: Vec<StoredEdge>,
}

impl AdjacencyList {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            incidence: vec![Vec::new(); vertex_count],
            edges: Vec::new(),
        }
    }

    /// Adds an undirected edge between `source` and `target`.
    ///
    /// Parallel edges and self-loops are accepted; a self-loop is
    /// recorded once in its vertex's incidence list.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfBounds`] when either endpoint
    /// is not a valid vertex index.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: f64) -> Result<EdgeId, GraphError> {
        let vertex_count = self.incidence.len();
        for vertex in [source, target] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfBounds {
                    vertex,
                    vertex_count,
                });
            }
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(StoredEdge {
            source,
            target,
            weight,
        });
        self.incidence[source].push(id);
        if source != target {
            self.incidence[target].push(id);
        }
        Ok(id)
    }
}

impl Graph for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn incident_edges(&self, vertex: usize) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .copied()
    }

    fn endpoints(&self, edge: EdgeId) -> (usize, usize) {
        let stored = &self.edges[edge.get()];
        (stored.source, stored.target)
    }

    fn weight(&self, edge: EdgeId) -> f64 {
        self.edges[edge.get()].weight
    }
}
