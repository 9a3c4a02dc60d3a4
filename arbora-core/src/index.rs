//! Dense index mapping between opaque vertex labels and `0..N-1`.
//!
//! The spanning core operates on dense indices only; callers holding
//! labelled graphs build a [`VertexIndexing`] once and translate in
//! both directions around a computation.

use std::collections::HashMap;
use std::hash::Hash;

use thiserror::Error;

/// Error returned when a label sequence does not form a bijection.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum IndexingError {
    /// A label appeared more than once in the input sequence.
    #[error("label at position {position} duplicates an earlier label")]
    DuplicateLabel {
        /// Zero-based position of the repeated label.
        position: usize,
    },
}

/// Bijection between opaque vertex labels and dense indices `0..N-1`.
///
/// Indices are assigned in input order, so the mapping is deterministic
/// for a given label sequence.
///
/// # Examples
/// ```
/// use arbora_core::VertexIndexing;
///
/// let indexing = VertexIndexing::try_from_labels(vec!["a", "b", "c"])?;
/// assert_eq!(indexing.len(), 3);
/// assert_eq!(indexing.index_of(&"b"), Some(1));
/// assert_eq!(indexing.label(2), Some(&"c"));
/// assert_eq!(indexing.index_of(&"z"), None);
/// # Ok::<(), arbora_core::IndexingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct VertexIndexing<V> {
    indices: HashMap<V, usize>,
    labels: Vec<V>,
}

impl<V: Eq + Hash + Clone> VertexIndexing<V> {
    /// Builds the bijection from a label sequence.
    ///
    /// # Errors
    /// Returns [`IndexingError::DuplicateLabel`] when the same label
    /// occurs twice; a bijection requires distinct labels.
    pub fn try_from_labels(labels: Vec<V>) -> Result<Self, IndexingError> {
        let mut indices = HashMap::with_capacity(labels.len());
        for (position, label) in labels.iter().enumerate() {
            if indices.insert(label.clone(), position).is_some() {
                return Err(IndexingError::DuplicateLabel { position });
            }
        }
        Ok(Self { indices, labels })
    }

    /// Returns the dense index for `label`, if present.
    #[must_use]
    pub fn index_of(&self, label: &V) -> Option<usize> {
        self.indices.get(label).copied()
    }

    /// Returns the label at `index`, the inverse of [`Self::index_of`].
    #[must_use]
    pub fn label(&self, index: usize) -> Option<&V> {
        self.labels.get(index)
    }

    /// Returns the number of mapped vertices.
    #[rustfmt::skip]
    #[must_use]
    pub fn len(&self) -> usize { self.labels.len() }

    /// Returns whether the mapping is empty.
    #[rustfmt::skip]
    #[must_use]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Iterates over the labels in dense index order.
    #[rustfmt::skip]
    pub fn labels(&self) -> impl Iterator<Item = &V> { self.labels.iter() }
}
