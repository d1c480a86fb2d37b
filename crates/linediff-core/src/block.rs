//! Grouping of edits into contiguous change blocks.

use serde::{Deserialize, Serialize};

use crate::edit::{Edit, EditKind};

/// The externally visible projection of a single edit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineDiff {
    /// The edit kind.
    pub kind: EditKind,
    /// 1-based line number in the old document, when the old side exists.
    pub old_line_number: Option<usize>,
    /// 1-based line number in the new document, when the new side exists.
    pub new_line_number: Option<usize>,
    /// Displayed content: the new-side text when present, else the old-side.
    pub content: String,
    /// The old-side text, kept alongside `content` for `Modified` rows so
    /// both halves of the replacement are available side by side.
    pub old_content: Option<String>,
    /// Similarity score for `Modified` rows.
    pub similarity: Option<f64>,
}

/// A maximal run of consecutive same-kind line diffs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiffBlock {
    /// The kind shared by every line in this block.
    pub kind: EditKind,
    /// 1-based first old line covered, or 0 when the old side is absent
    /// from the entire block (a pure `Added` block).
    pub old_start: usize,
    /// Number of old lines covered.
    pub old_count: usize,
    /// 1-based first new line covered, or 0 when the new side is absent
    /// from the entire block (a pure `Removed` block).
    pub new_start: usize,
    /// Number of new lines covered.
    pub new_count: usize,
    /// The lines of this block, in document order.
    pub lines: Vec<LineDiff>,
}

impl DiffBlock {
    fn open(edit: &Edit, old_lines: &[&str], new_lines: &[&str]) -> Self {
        let mut block = Self {
            kind: edit.kind(),
            old_start: edit.old_index().map_or(0, |i| i + 1),
            old_count: 0,
            new_start: edit.new_index().map_or(0, |i| i + 1),
            new_count: 0,
            lines: Vec::new(),
        };
        block.push(edit, old_lines, new_lines);
        block
    }

    fn push(&mut self, edit: &Edit, old_lines: &[&str], new_lines: &[&str]) {
        if edit.old_index().is_some() {
            self.old_count += 1;
        }
        if edit.new_index().is_some() {
            self.new_count += 1;
        }
        self.lines.push(project(edit, old_lines, new_lines));
    }
}

/// Derive the external [`LineDiff`] view of one edit.
fn project(edit: &Edit, old_lines: &[&str], new_lines: &[&str]) -> LineDiff {
    let old_index = edit.old_index();
    let new_index = edit.new_index();

    let content = match (new_index, old_index) {
        (Some(i), _) => new_lines[i].to_string(),
        (None, Some(i)) => old_lines[i].to_string(),
        // Every edit kind carries at least one index.
        (None, None) => String::new(),
    };
    let (old_content, similarity) = match *edit {
        Edit::Modified {
            old, similarity, ..
        } => (Some(old_lines[old].to_string()), Some(similarity)),
        _ => (None, None),
    };

    LineDiff {
        kind: edit.kind(),
        old_line_number: old_index.map(|i| i + 1),
        new_line_number: new_index.map(|i| i + 1),
        content,
        old_content,
        similarity,
    }
}

/// Merge consecutive same-kind edits into addressable blocks.
///
/// Single pass: a kind change closes the current block and opens a new one;
/// otherwise the block's counts extend (`old_count` iff the edit has an old
/// index, `new_count` iff it has a new index) and the projected line is
/// appended. Starts are fixed when the block opens.
pub fn group_blocks(edits: &[Edit], old_lines: &[&str], new_lines: &[&str]) -> Vec<DiffBlock> {
    let mut blocks: Vec<DiffBlock> = Vec::new();

    for edit in edits {
        match blocks.last_mut() {
            Some(block) if block.kind == edit.kind() => {
                block.push(edit, old_lines, new_lines);
            }
            _ => blocks.push(DiffBlock::open(edit, old_lines, new_lines)),
        }
    }

    blocks
}
