//! The complete diff result: blocks, statistics, and overall similarity.

use serde::{Deserialize, Serialize};

use crate::block::{DiffBlock, LineDiff};
use crate::edit::EditKind;

/// Per-kind line counts plus the two document sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
    pub modified: usize,
    /// Line count of the old document (not an edit count).
    pub total_old: usize,
    /// Line count of the new document (not an edit count).
    pub total_new: usize,
}

impl DiffStats {
    /// Number of lines touched by a change of any kind.
    pub fn changed(&self) -> usize {
        self.added + self.removed + self.modified
    }
}

/// The full output of one diff invocation. Immutable once returned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Ordered change blocks covering both documents end to end.
    pub blocks: Vec<DiffBlock>,
    /// Aggregate counts.
    pub stats: DiffStats,
    /// Overall document similarity in `[0, 1]`.
    pub similarity: f64,
}

impl DiffResult {
    /// The result of diffing two empty documents.
    pub(crate) fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            stats: DiffStats::default(),
            similarity: 1.0,
        }
    }

    /// Returns `true` if the documents were identical.
    pub fn is_identical(&self) -> bool {
        self.stats.changed() == 0
    }

    /// Iterate over every line diff across all blocks, in order.
    pub fn lines(&self) -> impl Iterator<Item = &LineDiff> {
        self.blocks.iter().flat_map(|b| b.lines.iter())
    }

    /// Total number of line diffs across all blocks.
    pub fn line_count(&self) -> usize {
        self.blocks.iter().map(|b| b.lines.len()).sum()
    }

    /// Count of lines with the given kind.
    pub fn count_of(&self, kind: EditKind) -> usize {
        match kind {
            EditKind::Added => self.stats.added,
            EditKind::Removed => self.stats.removed,
            EditKind::Unchanged => self.stats.unchanged,
            EditKind::Modified => self.stats.modified,
        }
    }
}
