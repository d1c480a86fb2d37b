//! Upgrade adjacent remove/add pairs to modified edits.

use crate::edit::Edit;
use crate::similarity::similarity;

/// Single left-to-right pass over a raw edit script.
///
/// Whenever a `Removed` edit is immediately followed by an `Added` edit and
/// the two lines score at least `threshold`, the pair collapses into one
/// `Modified` edit carrying both indices and the score. Deliberately greedy:
/// no lookahead past the next edit, no reordering, so a removed line with
/// two candidate additions always pairs with the first.
pub fn reclassify(
    edits: Vec<Edit>,
    old_lines: &[&str],
    new_lines: &[&str],
    threshold: f64,
) -> Vec<Edit> {
    let mut result = Vec::with_capacity(edits.len());
    let mut iter = edits.into_iter().peekable();

    while let Some(edit) = iter.next() {
        if let Edit::Removed { old } = edit {
            if let Some(&Edit::Added { new }) = iter.peek() {
                let score = similarity(old_lines[old], new_lines[new]);
                if score >= threshold {
                    iter.next();
                    result.push(Edit::Modified {
                        old,
                        new,
                        similarity: score,
                    });
                    continue;
                }
            }
        }
        result.push(edit);
    }

    result
}
