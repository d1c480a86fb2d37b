//! Myers shortest-edit-script search.
//!
//! Implements the greedy O((N+M)·D) algorithm from "An O(ND) Difference
//! Algorithm and Its Variations": for each edit distance `d` the
//! furthest-reaching path on every diagonal `k = x - y` is extended through
//! maximal runs of matching lines, and a snapshot of the reach vector per
//! depth allows exact backtracking of one optimal script.
//!
//! The trace keeps a full vector copy per depth, so working memory is
//! O(D²) in the worst case. That is fine for interactive document sizes;
//! the linear-space divide-and-conquer variant is the known alternative if
//! very large inputs ever matter.

use crate::edit::Edit;
use crate::lines::HashedLine;

/// Compute a minimum-length edit script transforming `old` into `new`.
///
/// The script contains only `Added`, `Removed`, and `Unchanged` edits, in
/// document order; modification detection is a later pass.
pub fn shortest_edit_script(old: &[HashedLine<'_>], new: &[HashedLine<'_>]) -> Vec<Edit> {
    // Degenerate shapes skip the search entirely.
    if old.is_empty() && new.is_empty() {
        return Vec::new();
    }
    if old.is_empty() {
        return (0..new.len()).map(|new| Edit::Added { new }).collect();
    }
    if new.is_empty() {
        return (0..old.len()).map(|old| Edit::Removed { old }).collect();
    }

    let trace = forward_search(old, new);
    backtrack(&trace, old.len() as isize, new.len() as isize)
}

/// Reach vectors per depth, indexed by `offset + k`.
struct Trace {
    depths: Vec<Vec<isize>>,
    offset: isize,
}

impl Trace {
    fn reach(&self, d: usize, k: isize) -> isize {
        self.depths[d][(self.offset + k) as usize]
    }
}

fn forward_search(old: &[HashedLine<'_>], new: &[HashedLine<'_>]) -> Trace {
    let n = old.len() as isize;
    let m = new.len() as isize;
    let offset = n + m;

    let mut v = vec![0isize; 2 * offset as usize + 1];
    let mut depths = Vec::new();

    for d in 0..=(n + m) {
        depths.push(v.clone());

        for k in (-d..=d).step_by(2) {
            let idx = (offset + k) as usize;

            let mut x = if k == -d {
                // Only reachable from k+1: an insertion.
                v[idx + 1]
            } else if k == d {
                // Only reachable from k-1: a deletion.
                v[idx - 1] + 1
            } else {
                let x_del = v[idx - 1] + 1;
                let x_ins = v[idx + 1];
                if x_del > x_ins { x_del } else { x_ins }
            };
            let mut y = x - k;

            // Snake: follow the diagonal through matching lines.
            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x >= n && y >= m {
                return Trace { depths, offset };
            }
        }
    }

    // Unreachable: d = n + m always suffices.
    Trace { depths, offset }
}

fn backtrack(trace: &Trace, n: isize, m: isize) -> Vec<Edit> {
    let mut edits = Vec::new();
    let (mut x, mut y) = (n, m);

    for d in (0..trace.depths.len()).rev() {
        let d = d as isize;
        let k = x - y;

        let prev_k = if k == -d {
            k + 1
        } else if k == d {
            k - 1
        } else if trace.reach(d as usize, k - 1) + 1 > trace.reach(d as usize, k + 1) {
            k - 1
        } else {
            k + 1
        };
        let prev_x = trace.reach(d as usize, prev_k);
        let prev_y = prev_x - prev_k;

        // Diagonal run taken after the move at this depth.
        while x > prev_x && y > prev_y {
            x -= 1;
            y -= 1;
            edits.push(Edit::Unchanged {
                old: x as usize,
                new: y as usize,
            });
        }

        if d > 0 {
            if x == prev_x {
                edits.push(Edit::Added {
                    new: prev_y as usize,
                });
            } else {
                edits.push(Edit::Removed {
                    old: prev_x as usize,
                });
            }
            x = prev_x;
            y = prev_y;
        }
    }

    edits.reverse();
    edits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edit::EditKind;
    use crate::lines::hash_lines;

    fn script(old: &[&str], new: &[&str]) -> Vec<Edit> {
        let old = hash_lines(old);
        let new = hash_lines(new);
        shortest_edit_script(&old, &new)
    }

    fn change_count(edits: &[Edit]) -> usize {
        edits
            .iter()
            .filter(|e| e.kind() != EditKind::Unchanged)
            .count()
    }

    /// Replay the script against `old` and check it reproduces `new`.
    fn assert_reconstructs(old: &[&str], new: &[&str], edits: &[Edit]) {
        let mut rebuilt = Vec::new();
        let mut old_cursor = 0usize;
        for edit in edits {
            match *edit {
                Edit::Unchanged { old: o, new: n } => {
                    assert_eq!(o, old_cursor);
                    assert_eq!(old[o], new[n]);
                    rebuilt.push(new[n]);
                    old_cursor += 1;
                }
                Edit::Removed { old: o } => {
                    assert_eq!(o, old_cursor);
                    old_cursor += 1;
                }
                Edit::Added { new: n } => rebuilt.push(new[n]),
                Edit::Modified { .. } => unreachable!("solver never emits modified"),
            }
        }
        assert_eq!(old_cursor, old.len());
        assert_eq!(rebuilt, new);
    }

    #[test]
    fn both_empty_is_empty_script() {
        assert!(script(&[], &[]).is_empty());
    }

    #[test]
    fn old_empty_adds_every_line() {
        let edits = script(&[], &["a", "b"]);
        assert_eq!(
            edits,
            vec![Edit::Added { new: 0 }, Edit::Added { new: 1 }]
        );
    }

    #[test]
    fn new_empty_removes_every_line() {
        let edits = script(&["a", "b"], &[]);
        assert_eq!(
            edits,
            vec![Edit::Removed { old: 0 }, Edit::Removed { old: 1 }]
        );
    }

    #[test]
    fn identical_documents_keep_everything() {
        let lines = ["one", "two", "three"];
        let edits = script(&lines, &lines);
        assert_eq!(change_count(&edits), 0);
        assert_eq!(edits.len(), 3);
    }

    #[test]
    fn middle_change_is_adjacent_remove_then_add() {
        let edits = script(&["line1", "line2", "line3"], &["line1", "lineTWO", "line3"]);
        assert_eq!(
            edits,
            vec![
                Edit::Unchanged { old: 0, new: 0 },
                Edit::Removed { old: 1 },
                Edit::Added { new: 1 },
                Edit::Unchanged { old: 2, new: 2 },
            ]
        );
    }

    #[test]
    fn classic_myers_example_has_minimal_length() {
        // "abcabba" -> "cbabac", the worked example from the paper; the
        // optimal script has 5 non-matching steps.
        let old: Vec<String> = "abcabba".chars().map(String::from).collect();
        let new: Vec<String> = "cbabac".chars().map(String::from).collect();
        let old_refs: Vec<&str> = old.iter().map(String::as_str).collect();
        let new_refs: Vec<&str> = new.iter().map(String::as_str).collect();

        let edits = script(&old_refs, &new_refs);
        assert_eq!(change_count(&edits), 5);
        assert_reconstructs(&old_refs, &new_refs, &edits);
    }

    #[test]
    fn script_reconstructs_new_document() {
        let old = ["line1", "line2", "line3", "line4"];
        let new = ["line2", "line3_modified", "line4", "line5"];
        let edits = script(&old, &new);
        assert_reconstructs(&old, &new, &edits);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        /// Brute-force line-level edit distance (insert/delete only, unit
        /// cost), the length of a true shortest edit script.
        fn reference_distance(old: &[&str], new: &[&str]) -> usize {
            let n = old.len();
            let m = new.len();
            let mut dp = vec![vec![0usize; m + 1]; n + 1];
            for i in 0..=n {
                dp[i][0] = i;
            }
            for j in 0..=m {
                dp[0][j] = j;
            }
            for i in 1..=n {
                for j in 1..=m {
                    dp[i][j] = if old[i - 1] == new[j - 1] {
                        dp[i - 1][j - 1]
                    } else {
                        dp[i - 1][j].min(dp[i][j - 1]) + 1
                    };
                }
            }
            dp[n][m]
        }

        fn doc_strategy() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[abc]{0,2}", 0..12)
        }

        proptest! {
            #[test]
            fn solver_matches_reference_edit_distance(
                old in doc_strategy(),
                new in doc_strategy(),
            ) {
                let old_refs: Vec<&str> = old.iter().map(String::as_str).collect();
                let new_refs: Vec<&str> = new.iter().map(String::as_str).collect();
                let edits = script(&old_refs, &new_refs);
                prop_assert_eq!(
                    change_count(&edits),
                    reference_distance(&old_refs, &new_refs)
                );
                assert_reconstructs(&old_refs, &new_refs, &edits);
            }
        }
    }
}
