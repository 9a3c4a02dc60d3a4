//! Minimum spanning forest construction via Prim's algorithm.
//!
//! Grows a spanning forest one vertex at a time: every vertex starts
//! on the frontier at infinite cost, the globally cheapest frontier
//! vertex is settled each iteration, and its incident edges relax the
//! remaining frontier through the heap's decrease-key. The first
//! vertex settled in each connected component carries no connecting
//! edge, which is what makes the output a forest on disconnected
//! input rather than a single tree.
//!
//! One decrease-key per edge (O(1) amortized) plus one extract-min per
//! vertex (O(log V) amortized) gives O(E + V log V) overall.

use std::cmp::Ordering;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use tracing::{debug, instrument, warn};

use crate::graph::{EdgeId, Graph};
use crate::heap::{FibonacciHeap, HeapError, HeapHandle};



/// Errors returned while computing a minimum spanning forest.
#[non_exhaustive]
#[derive(Clone, Debug, thiserror::Error, PartialEq)]
pub enum SpanningError {
    /// The caller supplied a graph with no vertices.
    #[error("cannot compute a spanning forest for an empty graph")]
    EmptyGraph,
    /// An edge led to a vertex index outside the graph's vertex set.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The offending edge.
        edge: usize,
        /// The out-of-range vertex index the edge produced.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a non-finite weight.
    #[error("edge {edge} has non-finite weight {weight}")]
    NonFiniteWeight {
        /// The offending edge.
        edge: usize,
        /// The non-finite weight observed on the edge.
        weight: f64,
    },
    /// The computation was cancelled through its [`CancelToken`].
    #[error("spanning forest computation was cancelled")]
    Cancelled,
    /// The priority queue reported a contract violation, indicating a
    /// logic error in the core.
    #[error("priority queue misuse: {0}")]
    Heap(#[from] HeapError),
}

impl SpanningError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> SpanningErrorCode {
        match self {
            Self::EmptyGraph => SpanningErrorCode::EmptyGraph,
            Self::InvalidVertex { .. } => SpanningErrorCode::InvalidVertex,
            Self::NonFiniteWeight { .. } => SpanningErrorCode::NonFiniteWeight,
            Self::Cancelled => SpanningErrorCode::Cancelled,
            Self::Heap(_) => SpanningErrorCode::Heap,
        }
    }
}

/// Machine-readable error codes for [`SpanningError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SpanningErrorCode {
    /// The caller supplied a graph with no vertices.
    EmptyGraph,
    /// An edge led to a vertex index outside the graph's vertex set.
    InvalidVertex,
    /// An edge carried a non-finite weight.
    NonFiniteWeight,
    /// The computation was cancelled.
    Cancelled,
    /// The priority queue reported a contract violation.
    Heap,
}

impl SpanningErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "SPANNING_EMPTY_GRAPH",
            Self::InvalidVertex => "SPANNING_INVALID_VERTEX",
            Self::NonFiniteWeight => "SPANNING_NON_FINITE_WEIGHT",
            Self::Cancelled => "SPANNING_CANCELLED",
            Self::Heap => "SPANNING_HEAP_MISUSE",
        }
    }
}

/// Cooperative cancellation signal for a running computation.
///
/// The flag is checked once at the top of every extraction iteration;
/// the core never polls anything else. Clones share the same flag.
///
/// # Examples
/// ```
/// use arbora_core::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; observed by all clones.
    pub fn cancel(&self) {
        self.flag.store(true, AtomicOrdering::Release);
    }

    /// Returns whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(AtomicOrdering::Acquire)
    }
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum
/// spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<EdgeId>,
    total_weight: f64,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the selected edges in settlement order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[EdgeId] { &self.edges }

    /// Returns the number of selected edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the sum of the selected edges' weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of connected components spanned.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single component.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }
}

/// Edge cost with a total order, so `f64` weights can key the heap.
///
/// Weights are validated finite before entering the heap, which keeps
/// `total_cmp` ordering identical to the numeric one; the infinite
/// sentinel marks vertices with no known connection yet.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cost(f64);

impl Cost {
    const UNREACHED: Self = Self(f64::INFINITY);
}

impl Eq for Cost {}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-vertex frontier state, fresh for each computation.
struct FrontierState {
    settled: bool,
    best_cost: Cost,
    connecting_edge: Option<EdgeId>,
}

/// Vertex state table plus the live heap handle per vertex.
struct Frontier {
    states: Vec<FrontierState>,
    handles: Vec<HeapHandle>,
}

impl Frontier {
    /// Seeds every vertex into the heap at infinite cost.
    fn seed(heap: &mut FibonacciHeap<Cost, usize>, vertex_count: usize) -> Self {
        let mut states = Vec::with_capacity(vertex_count);
        let mut handles = Vec::with_capacity(vertex_count);
        for vertex in 0..vertex_count {
            states.push(FrontierState {
                settled: false,
                best_cost: Cost::UNREACHED,
                connecting_edge: None,
            });
            handles.push(heap.insert(Cost::UNREACHED, vertex));
        }
        Self { states, handles }
    }

    fn is_settled(&self, vertex: usize) -> bool {
        self.states[vertex].settled
    }

    /// Finalizes a vertex and returns its recorded connecting edge.
    fn settle(&mut self, vertex: usize) -> Option<EdgeId> {
        let state = &mut self.states[vertex];
        state.settled = true;
        state.connecting_edge
    }

    /// Records a cheaper connection for an unsettled vertex, if `cost`
    /// improves on its best known cost. Returns the heap handle to
    /// decrease when it does.
    fn relax(&mut self, vertex: usize, edge: EdgeId, cost: Cost) -> Option<HeapHandle> {
        let state = &mut self.states[vertex];
        if cost < state.best_cost {
            state.best_cost = cost;
            state.connecting_edge = Some(edge);
            Some(self.handles[vertex])
        } else {
            None
        }
    }
}

/// Computes a minimum spanning forest of `graph`.
///
/// Disconnected input is not an error: each connected component
/// contributes `size − 1` edges, and isolated vertices contribute
/// none. Negative and zero edge weights are supported. When edge
/// weights tie, the selected edge set is one of the equally minimal
/// alternatives; only the total weight is canonical.
///
/// # Errors
/// Returns [`SpanningError::EmptyGraph`] when `graph` has no vertices,
/// [`SpanningError::InvalidVertex`] when an edge leads outside the
/// vertex set, and [`SpanningError::NonFiniteWeight`] when an edge
/// weight is NaN or infinite.
///
/// # Examples
/// ```
/// use arbora_core::{AdjacencyList, minimum_spanning_forest};
///
/// let mut graph = AdjacencyList::with_vertices(3);
/// graph.add_edge(0, 1, 1.0)?;
/// graph.add_edge(1, 2, 2.0)?;
/// graph.add_edge(0, 2, 5.0)?;
///
/// let forest = minimum_spanning_forest(&graph)?;
/// assert_eq!(forest.edge_count(), 2);
/// assert_eq!(forest.total_weight(), 3.0);
/// assert!(forest.is_tree());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn minimum_spanning_forest<G: Graph>(graph: &G) -> Result<SpanningForest, SpanningError> {
    minimum_spanning_forest_with(graph, &CancelToken::new())
}

/// Computes a minimum spanning forest, checking `cancel` between
/// iterations.
///
/// Cancellation is cooperative: the token is read once per settled
/// vertex, and a cancelled run returns [`SpanningError::Cancelled`]
/// leaving no residual state.
///
/// # Errors
/// As [`minimum_spanning_forest`], plus [`SpanningError::Cancelled`].
#[instrument(
    name = "spanning.prim",
    err,
    skip(graph, cancel),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn minimum_spanning_forest_with<G: Graph>(
    graph: &G,
    cancel: &CancelToken,
) -> Result<SpanningForest, SpanningError> {
    let vertex_count = graph.vertex_count();
    if vertex_count == 0 {
        warn!("graph has no vertices, returning error");
        return Err(SpanningError::EmptyGraph);
    }

    let mut heap = FibonacciHeap::with_capacity(vertex_count);
    let mut frontier = Frontier::seed(&mut heap, vertex_count);

    let mut edges = Vec::new();
    let mut total_weight = 0.0_f64;
    let mut component_count = 0_usize;

    while !heap.is_empty() {
        if cancel.is_cancelled() {
            return Err(SpanningError::Cancelled);
        }

        let (_, vertex) = heap.extract_min()?;
        match frontier.settle(vertex) {
            Some(edge) => {
                total_weight += graph.weight(edge);
                edges.push(edge);
            }
            // First vertex of a component: roots a new tree.
            None => component_count += 1,
        }

        for edge in graph.incident_edges(vertex) {
            let neighbour = graph.opposite(edge, vertex);
            if neighbour >= vertex_count {
                return Err(SpanningError::InvalidVertex {
                    edge: edge.get(),
                    vertex: neighbour,
                    vertex_count,
                });
            }
            if frontier.is_settled(neighbour) {
                continue;
            }
            let weight = graph.weight(edge);
            if !weight.is_finite() {
                return Err(SpanningError::NonFiniteWeight {
                    edge: edge.get(),
                    weight,
                });
            }
            if let Some(handle) = frontier.relax(neighbour, edge, Cost(weight)) {
                heap.decrease_key(handle, Cost(weight))?;
            }
        }
    }

    debug!(
        edges = edges.len(),
        components = component_count,
        total_weight,
        "spanning forest computed"
    );

    Ok(SpanningForest {
        edges,
        total_weight,
        component_count,
    })
}
