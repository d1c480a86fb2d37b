//! Normalized string similarity based on Levenshtein distance.
//!
//! Invoked only on candidate modified-line pairs, never on whole documents,
//! so the quadratic table cost stays bounded by line lengths.

/// Classic Levenshtein distance over `char`s: insertion, deletion, and
/// substitution each cost 1, no transposition.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Two-row DP over the (len(b)+1) x (len(a)+1) table.
    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0usize; a.len() + 1];

    for (j, &bc) in b.iter().enumerate() {
        curr[0] = j + 1;
        for (i, &ac) in a.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[i + 1] = (prev[i + 1] + 1).min(curr[i] + 1).min(prev[i] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

/// Similarity between two strings in `[0, 1]`.
///
/// Equal strings are `1.0` without running the full algorithm; one empty
/// side is `0.0`; otherwise `1 - levenshtein / max(len)`.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let longest = a.chars().count().max(b.chars().count());
    1.0 - levenshtein(a, b) as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_reference_vectors() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", "abc"), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", "abd"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn equal_strings_are_fully_similar() {
        assert_eq!(similarity("same", "same"), 1.0);
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn one_empty_side_has_zero_similarity() {
        assert_eq!(similarity("", "abc"), 0.0);
        assert_eq!(similarity("abc", ""), 0.0);
    }

    #[test]
    fn single_substitution_similarity() {
        // "foo" vs "fog": one substitution over length 3.
        let s = similarity("foo", "fog");
        assert!((s - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_strings_have_zero_similarity() {
        assert_eq!(similarity("foo", "xyz"), 0.0);
    }

    #[test]
    fn multibyte_chars_count_as_single_edits() {
        assert_eq!(levenshtein("héllo", "hello"), 1);
    }
}
