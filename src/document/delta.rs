//! Delta edits: the host's mutation protocol.
//!
//! A [`Delta`] describes a transformation of the document from its current
//! state as an ordered run of retain/insert/delete operations. This core
//! only builds deltas; composition and application are the host's concern.

use serde::{Deserialize, Serialize};

use super::types::Formats;

/// A single operation in a delta sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeltaOp {
    /// Keep the next `n` characters unchanged.
    Retain(usize),
    /// Insert text at the current position, carrying the given formats.
    Insert { text: String, formats: Formats },
    /// Delete the next `n` characters.
    Delete(usize),
}

/// An ordered list of edit operations, built with a chainable API:
///
/// ```
/// use vellum::Delta;
///
/// let delta = Delta::new().retain(10).insert("\n").delete(4);
/// assert_eq!(delta.ops().len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    ops: Vec<DeltaOp>,
}

impl Delta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a retain. Zero-length retains are dropped.
    pub fn retain(mut self, n: usize) -> Self {
        if n > 0 {
            self.ops.push(DeltaOp::Retain(n));
        }
        self
    }

    /// Append an unformatted insert. Empty inserts are dropped.
    pub fn insert(self, text: impl Into<String>) -> Self {
        self.insert_with(text, Formats::new())
    }

    /// Append an insert carrying formats.
    pub fn insert_with(mut self, text: impl Into<String>, formats: Formats) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.ops.push(DeltaOp::Insert { text, formats });
        }
        self
    }

    /// Append a delete. Zero-length deletes are dropped.
    pub fn delete(mut self, n: usize) -> Self {
        if n > 0 {
            self.ops.push(DeltaOp::Delete(n));
        }
        self
    }

    pub fn ops(&self) -> &[DeltaOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
