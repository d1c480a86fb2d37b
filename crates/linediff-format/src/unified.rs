//! Unified patch rendering.
//!
//! Hunks are rebuilt from the flattened line sequence: every run of changed
//! lines is padded with up to `context_lines` unchanged lines on both sides,
//! runs whose padded windows touch are merged, and each hunk gets a
//! `@@ -S[,C] +S[,C] @@` header. `Modified` rows are emitted as a `-old`
//! line followed by a `+new` line so the output applies cleanly with a
//! standard patch tool.

use linediff_core::{DiffResult, EditKind, LineDiff};

/// Render a diff as unified patch text.
///
/// `old_label` and `new_label` appear verbatim in the `---`/`+++` header
/// lines. Identical documents render as the headers alone.
pub fn generate_unified_diff(
    result: &DiffResult,
    old_label: &str,
    new_label: &str,
    context_lines: usize,
) -> String {
    let mut out = format!("--- {old_label}\n+++ {new_label}\n");

    let lines: Vec<&LineDiff> = result.lines().collect();
    for window in hunk_windows(&lines, context_lines) {
        render_hunk(&mut out, &lines, window);
    }

    out
}

/// Inclusive index ranges into the flattened line sequence, one per hunk.
fn hunk_windows(lines: &[&LineDiff], context_lines: usize) -> Vec<(usize, usize)> {
    let mut windows: Vec<(usize, usize)> = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        if line.kind == EditKind::Unchanged {
            continue;
        }
        let start = i.saturating_sub(context_lines);
        let end = (i + context_lines).min(lines.len() - 1);
        match windows.last_mut() {
            // Touching or overlapping windows merge into one hunk.
            Some((_, prev_end)) if start <= *prev_end + 1 => *prev_end = end,
            _ => windows.push((start, end)),
        }
    }

    windows
}

fn render_hunk(out: &mut String, lines: &[&LineDiff], (start, end): (usize, usize)) {
    let hunk = &lines[start..=end];

    let old_count = hunk.iter().filter(|l| l.old_line_number.is_some()).count();
    let new_count = hunk.iter().filter(|l| l.new_line_number.is_some()).count();
    let old_start = hunk
        .iter()
        .find_map(|l| l.old_line_number)
        .unwrap_or_else(|| last_position(&lines[..start], |l| l.old_line_number));
    let new_start = hunk
        .iter()
        .find_map(|l| l.new_line_number)
        .unwrap_or_else(|| last_position(&lines[..start], |l| l.new_line_number));

    out.push_str(&format!(
        "@@ -{} +{} @@\n",
        range_token(old_start, old_count),
        range_token(new_start, new_count),
    ));

    for line in hunk {
        match line.kind {
            EditKind::Unchanged => {
                out.push(' ');
                out.push_str(&line.content);
                out.push('\n');
            }
            EditKind::Added => {
                out.push('+');
                out.push_str(&line.content);
                out.push('\n');
            }
            EditKind::Removed => {
                out.push('-');
                out.push_str(&line.content);
                out.push('\n');
            }
            EditKind::Modified => {
                out.push('-');
                out.push_str(line.old_content.as_deref().unwrap_or_default());
                out.push('\n');
                out.push('+');
                out.push_str(&line.content);
                out.push('\n');
            }
        }
    }
}

/// Patch-style anchor for a side with no lines in the hunk: the last line
/// number of that side before the hunk, or 0 at the start of the document.
fn last_position(prefix: &[&LineDiff], side: impl Fn(&LineDiff) -> Option<usize>) -> usize {
    prefix.iter().rev().find_map(|l| side(l)).unwrap_or(0)
}

fn range_token(start: usize, count: usize) -> String {
    if count == 1 {
        format!("{start}")
    } else {
        format!("{start},{count}")
    }
}
