//! The diff pipeline: split, hash, solve, reclassify, group, aggregate.

use tracing::debug;

use crate::block::group_blocks;
use crate::edit::{Edit, EditKind};
use crate::error::DiffError;
use crate::lines::{hash_lines, split_lines};
use crate::myers::shortest_edit_script;
use crate::reclassify::reclassify;
use crate::result::{DiffResult, DiffStats};

/// Tuning knobs for a diff invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DiffOptions {
    /// Minimum similarity for an adjacent remove/add pair to become one
    /// `Modified` edit.
    pub modified_threshold: f64,
    /// Reject documents whose larger side exceeds this many lines.
    /// `None` disables the ceiling.
    pub max_lines: Option<usize>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            modified_threshold: 0.5,
            max_lines: Some(500_000),
        }
    }
}

/// Compute the full line diff between two documents.
///
/// Total over all string inputs, including empty documents; the pipeline is
/// synchronous and allocates only structures scoped to this call.
pub fn compute_diff(old_text: &str, new_text: &str) -> DiffResult {
    let options = DiffOptions {
        max_lines: None,
        ..DiffOptions::default()
    };
    match compute_diff_with(old_text, new_text, &options) {
        Ok(result) => result,
        // No ceiling is set, so the pipeline cannot fail.
        Err(_) => unreachable!("budget-free diff is total"),
    }
}

/// Compute a diff with explicit [`DiffOptions`].
///
/// Fails only when [`DiffOptions::max_lines`] is set and exceeded.
pub fn compute_diff_with(
    old_text: &str,
    new_text: &str,
    options: &DiffOptions,
) -> Result<DiffResult, DiffError> {
    let old_lines = split_lines(old_text);
    let new_lines = split_lines(new_text);

    let largest = old_lines.len().max(new_lines.len());
    if let Some(limit) = options.max_lines {
        if largest > limit {
            return Err(DiffError::InputTooLarge {
                lines: largest,
                limit,
            });
        }
    }

    // Two empty documents are fully similar; the aggregate formula below
    // would otherwise divide by zero.
    if old_lines.is_empty() && new_lines.is_empty() {
        return Ok(DiffResult::empty());
    }

    let old_hashed = hash_lines(&old_lines);
    let new_hashed = hash_lines(&new_lines);

    let raw = shortest_edit_script(&old_hashed, &new_hashed);
    debug!(
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        raw_edits = raw.len(),
        "edit script solved"
    );

    let edits = reclassify(raw, &old_lines, &new_lines, options.modified_threshold);
    let blocks = group_blocks(&edits, &old_lines, &new_lines);
    let stats = tally(&edits, old_lines.len(), new_lines.len());
    // A dissimilar replacement counts once per side, so changes can exceed
    // the larger document's size; clamp to keep the score in [0, 1].
    let similarity = (1.0 - stats.changed() as f64 / largest as f64).max(0.0);
    debug!(blocks = blocks.len(), similarity, "diff complete");

    Ok(DiffResult {
        blocks,
        stats,
        similarity,
    })
}

fn tally(edits: &[Edit], total_old: usize, total_new: usize) -> DiffStats {
    let mut stats = DiffStats {
        total_old,
        total_new,
        ..DiffStats::default()
    };
    for edit in edits {
        match edit.kind() {
            EditKind::Added => stats.added += 1,
            EditKind::Removed => stats.removed += 1,
            EditKind::Unchanged => stats.unchanged += 1,
            EditKind::Modified => stats.modified += 1,
        }
    }
    stats
}
