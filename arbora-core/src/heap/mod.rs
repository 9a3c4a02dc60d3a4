//! Fibonacci heap priority queue with decrease-key.
//!
//! A forest of heap-ordered multiway trees with lazy consolidation:
//! insert and decrease-key run in O(1) amortized, extract-min in
//! O(log n) amortized. Roots are kept on a circular doubly-linked
//! list, as are the children of each node, and the heap tracks the
//! global minimum root directly.
//!
//! The classic pointer structure is stored as an arena: every link is
//! an index into a slot vector, vacated slots go on a free list, and
//! handles carry a per-slot generation so that use after extraction is
//! detected instead of silently addressing a recycled node.

use thiserror::Error;


/// An error produced by heap operations that violate their contract.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// The minimum of an empty heap was requested.
    #[error("cannot extract the minimum of an empty heap")]
    Empty,
    /// A handle referred to a node that is no longer in the heap.
    #[error("handle {index} does not refer to a live heap node")]
    StaleHandle {
        /// Arena index named by the stale handle.
        index: usize,
    },
    /// A decrease-key supplied a key greater than the current key.
    ///
    /// Accepting it would break heap order, so it fails loudly rather
    /// than being ignored.
    #[error("new key for handle {index} exceeds its current key")]
    KeyNotDecreased {
        /// Arena index of the node whose key was not decreased.
        index: usize,
    },
}

/// Machine-readable error codes for [`HeapError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HeapErrorCode {
    /// The minimum of an empty heap was requested.
    Empty,
    /// A handle referred to a node that is no longer in the heap.
    StaleHandle,
    /// A decrease-key supplied a key greater than the current key.
    KeyNotDecreased,
}

impl HeapError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> HeapErrorCode {
        match self {
            Self::Empty => HeapErrorCode::Empty,
            Self::StaleHandle { .. } => HeapErrorCode::StaleHandle,
            Self::KeyNotDecreased { .. } => HeapErrorCode::KeyNotDecreased,
        }
    }
}

impl HeapErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "HEAP_EMPTY",
            Self::StaleHandle => "HEAP_STALE_HANDLE",
            Self::KeyNotDecreased => "HEAP_KEY_NOT_DECREASED",
        }
    }
}

/// Handle to a live node, returned by [`FibonacciHeap::insert`].
///
/// A handle stays valid until its node is removed by
/// [`FibonacciHeap::extract_min`]; afterwards any use fails with
/// [`HeapError::StaleHandle`], even if the underlying arena slot has
/// been reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeapHandle {
    index: usize,
    generation: u64,
}

/// One heap node: payload, key, and arena-index links.
#[derive(Debug)]
struct Node<K, T> {
    key: K,
    item: T,
    parent: Option<usize>,
    child: Option<usize>,
    left: usize,
    right: usize,
    degree: usize,
    /// Set when the node has lost a child since last becoming a child.
    marked: bool,
}

/// Arena slot; `generation` advances every time the slot is vacated.
#[derive(Debug)]
struct Slot<K, T> {
    node: Option<Node<K, T>>,
    generation: u64,
}

/// Fibonacci heap over keys `K` and payloads `T`.
///
/// # Examples
/// ```
/// use arbora_core::FibonacciHeap;
///
/// let mut heap = FibonacciHeap::new();
/// let handle = heap.insert(10, "b");
/// heap.insert(5, "a");
/// heap.decrease_key(handle, 1)?;
/// assert_eq!(heap.find_min(), Some((&1, &"b")));
/// assert_eq!(heap.extract_min()?, (1, "b"));
/// assert_eq!(heap.extract_min()?, (5, "a"));
/// assert!(heap.is_empty());
/// # Ok::<(), arbora_core::HeapError>(())
/// ```
#[derive(Debug)]
pub struct FibonacciHeap<K, T> {
    slots: Vec<Slot<K, T>>,
    free: Vec<usize>,
    min: Option<usize>,
    len: usize,
}

impl<K: Ord, T> Default for FibonacciHeap<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, T> FibonacciHeap<K, T> {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            min: None,
            len: 0,
        }
    }

    /// Creates an empty heap with arena capacity for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            min: None,
            len: 0,
        }
    }

    /// Returns the number of nodes in the heap.
    #[rustfmt::skip]
    #[must_use]
    pub const fn len(&self) -> usize { self.len }

    /// Returns whether the heap holds no nodes.
    #[rustfmt::skip]
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.len == 0 }

    /// Adds a node as a new singleton root. O(1).
    pub fn insert(&mut self, key: K, item: T) -> HeapHandle {
        let index = self.allocate(key, item);
        let generation = self.slots[index].generation;

        match self.min {
            None => self.min = Some(index),
            Some(min) => {
                self.splice_before(index, min);
                if self.node(index).key < self.node(min).key {
                    self.min = Some(index);
                }
            }
        }
        self.len += 1;

        HeapHandle { index, generation }
    }

    /// Returns the key and payload of the current minimum. O(1).
    #[must_use]
    pub fn find_min(&self) -> Option<(&K, &T)> {
        self.min.map(|index| {
            let node = self.node(index);
            (&node.key, &node.item)
        })
    }

    /// Removes and returns the minimum node's key and payload.
    ///
    /// Promotes the minimum's children to roots and consolidates
    /// equal-degree root trees. O(log n) amortized.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no nodes.
    pub fn extract_min(&mut self) -> Result<(K, T), HeapError> {
        let min = self.min.ok_or(HeapError::Empty)?;

        // Promote every child of the minimum to root status.
        if let Some(first_child) = self.node(min).child {
            for child in self.ring_members(first_child) {
                self.remove_from_ring(child);
                let node = self.node_mut(child);
                node.parent = None;
                node.marked = false;
                self.splice_before(child, min);
            }
            self.node_mut(min).child = None;
        }

        let successor = self.node(min).right;
        self.remove_from_ring(min);
        if successor == min {
            self.min = None;
        } else {
            self.min = Some(successor);
            self.consolidate();
        }

        let node = self.vacate(min);
        self.len -= 1;
        Ok((node.key, node.item))
    }

    /// Lowers the key of the node addressed by `handle` to `new_key`.
    ///
    /// An equal key is accepted and is a no-op structurally. If heap
    /// order against the parent is violated, the node is cut to root
    /// status and marked ancestors are cut in cascade. O(1) amortized.
    ///
    /// # Errors
    /// Returns [`HeapError::StaleHandle`] when the handle's node has
    /// already been extracted, and [`HeapError::KeyNotDecreased`] when
    /// `new_key` exceeds the node's current key.
    pub fn decrease_key(&mut self, handle: HeapHandle, new_key: K) -> Result<(), HeapError> {
        let index = handle.index;
        let live = self
            .slots
            .get(index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_ref());
        let Some(node) = live else {
            return Err(HeapError::StaleHandle { index });
        };
        if new_key > node.key {
            return Err(HeapError::KeyNotDecreased { index });
        }

        self.node_mut(index).key = new_key;
        if let Some(parent) = self.node(index).parent {
            if self.node(index).key < self.node(parent).key {
                self.cut(index, parent);
                self.cascading_cut(parent);
            }
        }
        if let Some(min) = self.min {
            if self.node(index).key < self.node(min).key {
                self.min = Some(index);
            }
        }
        Ok(())
    }

    // ── Arena plumbing ──────────────────────────────────────────────

    fn allocate(&mut self, key: K, item: T) -> usize {
        let node = Node {
            key,
            item,
            parent: None,
            child: None,
            left: 0,
            right: 0,
            degree: 0,
            marked: false,
        };
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot {
                    node: Some(node),
                    generation: 0,
                });
                self.slots.len() - 1
            }
        };
        let node = self.node_mut(index);
        node.left = index;
        node.right = index;
        index
    }

    fn vacate(&mut self, index: usize) -> Node<K, T> {
        let slot = &mut self.slots[index];
        slot.generation += 1;
        self.free.push(index);
        slot.node.take().expect("vacated arena slot held no node")
    }

    fn node(&self, index: usize) -> &Node<K, T> {
        self.slots[index]
            .node
            .as_ref()
            .expect("arena slot for a linked node is vacant")
    }

    fn node_mut(&mut self, index: usize) -> &mut Node<K, T> {
        self.slots[index]
            .node
            .as_mut()
            .expect("arena slot for a linked node is vacant")
    }

    // ── Ring manipulation ───────────────────────────────────────────

    /// Inserts `index` into the ring containing `anchor`, to its left.
    fn splice_before(&mut self, index: usize, anchor: usize) {
        let left = self.node(anchor).left;
        self.node_mut(index).right = anchor;
        self.node_mut(index).left = left;
        self.node_mut(left).right = index;
        self.node_mut(anchor).left = index;
    }

    /// Unlinks `index` from its ring, leaving it self-linked.
    fn remove_from_ring(&mut self, index: usize) {
        let left = self.node(index).left;
        let right = self.node(index).right;
        self.node_mut(left).right = right;
        self.node_mut(right).left = left;
        let node = self.node_mut(index);
        node.left = index;
        node.right = index;
    }

    /// Collects every member of the ring containing `start`.
    fn ring_members(&self, start: usize) -> Vec<usize> {
        let mut members = vec![start];
        let mut current = self.node(start).right;
        while current != start {
            members.push(current);
            current = self.node(current).right;
        }
        members
    }

    // ── Structural repair ───────────────────────────────────────────

    /// Unions root trees of equal degree until all root degrees differ,
    /// then rebuilds the root ring and the minimum pointer.
    fn consolidate(&mut self) {
        let Some(start) = self.min else { return };
        let roots = self.ring_members(start);
        let mut buckets: Vec<Option<usize>> = Vec::new();

        for root in roots {
            self.remove_from_ring(root);
            let mut current = root;
            loop {
                let degree = self.node(current).degree;
                if buckets.len() <= degree {
                    buckets.resize(degree + 1, None);
                }
                match buckets[degree].take() {
                    None => {
                        buckets[degree] = Some(current);
                        break;
                    }
                    Some(other) => {
                        // The smaller key becomes the parent.
                        let (parent, child) = if self.node(other).key < self.node(current).key {
                            (other, current)
                        } else {
                            (current, other)
                        };
                        self.link(child, parent);
                        current = parent;
                    }
                }
            }
        }

        self.min = None;
        for root in buckets.into_iter().flatten() {
            match self.min {
                None => self.min = Some(root),
                Some(min) => {
                    self.splice_before(root, min);
                    if self.node(root).key < self.node(min).key {
                        self.min = Some(root);
                    }
                }
            }
        }
    }

    /// Attaches the detached root `child` under `parent`, clearing the
    /// new child's mark.
    fn link(&mut self, child: usize, parent: usize) {
        {
            let node = self.node_mut(child);
            node.parent = Some(parent);
            node.marked = false;
        }
        match self.node(parent).child {
            None => self.node_mut(parent).child = Some(child),
            Some(first) => self.splice_before(child, first),
        }
        self.node_mut(parent).degree += 1;
    }

    /// Cuts `index` from `parent` and promotes it to root status.
    fn cut(&mut self, index: usize, parent: usize) {
        let right = self.node(index).right;
        if self.node(parent).child == Some(index) {
            self.node_mut(parent).child = if right == index { None } else { Some(right) };
        }
        self.remove_from_ring(index);
        self.node_mut(parent).degree -= 1;
        {
            let node = self.node_mut(index);
            node.parent = None;
            node.marked = false;
        }
        match self.min {
            None => self.min = Some(index),
            Some(min) => self.splice_before(index, min),
        }
    }

    /// Walks up from a node that just lost a child, marking the first
    /// unmarked ancestor and cutting already-marked ones, which bounds
    /// tree depth for the amortized extract-min cost.
    fn cascading_cut(&mut self, start: usize) {
        let mut current = start;
        while let Some(parent) = self.node(current).parent {
            if !self.node(current).marked {
                self.node_mut(current).marked = true;
                break;
            }
            self.cut(current, parent);
            current = parent;
        }
    }
}
