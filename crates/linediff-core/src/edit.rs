//! The internal edit-script representation.
//!
//! A tagged-variant [`Edit`] models the four edit kinds with their
//! kind-specific fields; indices are zero-based positions into the
//! originating document.

use serde::{Deserialize, Serialize};

/// The kind of a line edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// A line present only in the new document.
    Added,
    /// A line present only in the old document.
    Removed,
    /// A line present in both documents.
    Unchanged,
    /// An old line replaced by a sufficiently similar new line.
    Modified,
}

/// A single operation in an edit script.
#[derive(Clone, Debug, PartialEq)]
pub enum Edit {
    /// Insert `new_lines[new]`.
    Added { new: usize },
    /// Delete `old_lines[old]`.
    Removed { old: usize },
    /// Keep `old_lines[old]`, equal to `new_lines[new]`.
    Unchanged { old: usize, new: usize },
    /// Replace `old_lines[old]` with `new_lines[new]`; `similarity` is the
    /// normalized score that justified the upgrade from a remove/add pair.
    Modified {
        old: usize,
        new: usize,
        similarity: f64,
    },
}

impl Edit {
    /// The kind tag of this edit.
    pub fn kind(&self) -> EditKind {
        match self {
            Edit::Added { .. } => EditKind::Added,
            Edit::Removed { .. } => EditKind::Removed,
            Edit::Unchanged { .. } => EditKind::Unchanged,
            Edit::Modified { .. } => EditKind::Modified,
        }
    }

    /// Zero-based old-document index, if this edit touches the old side.
    pub fn old_index(&self) -> Option<usize> {
        match *self {
            Edit::Added { .. } => None,
            Edit::Removed { old }
            | Edit::Unchanged { old, .. }
            | Edit::Modified { old, .. } => Some(old),
        }
    }

    /// Zero-based new-document index, if this edit touches the new side.
    pub fn new_index(&self) -> Option<usize> {
        match *self {
            Edit::Removed { .. } => None,
            Edit::Added { new }
            | Edit::Unchanged { new, .. }
            | Edit::Modified { new, .. } => Some(new),
        }
    }
}
