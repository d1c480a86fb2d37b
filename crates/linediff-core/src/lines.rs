//! Line splitting and fingerprinting.
//!
//! Documents are split on `'\n'` as the sole delimiter, with no trimming or
//! line-ending normalization: a `'\r'` left behind by CRLF input stays part
//! of the line, and a trailing `'\n'` produces a final empty line.

/// Split a document into its lines.
///
/// The empty document has zero lines; any other document has exactly
/// one line per `'\n'`-separated segment.
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

/// Rolling polynomial fingerprint of a line, folded into a wrapping `i32`.
///
/// Fast and deterministic but not collision-free; callers must confirm a
/// hash match with full equality when correctness matters (see
/// [`HashedLine`]).
pub fn hash_line(line: &str) -> i32 {
    let mut h: i32 = 0;
    for c in line.chars() {
        h = h.wrapping_mul(31).wrapping_add(c as i32);
    }
    h
}

/// A line paired with its fingerprint, used inside the solver's inner loop.
///
/// Equality compares hashes first as a cheap pre-filter and confirms with a
/// full string comparison on match, so a hash collision can never produce a
/// wrong edit script.
#[derive(Clone, Copy, Debug)]
pub struct HashedLine<'a> {
    hash: i32,
    text: &'a str,
}

impl<'a> HashedLine<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            hash: hash_line(text),
            text,
        }
    }

    /// The line content.
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl PartialEq for HashedLine<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.text == other.text
    }
}

impl Eq for HashedLine<'_> {}

/// Fingerprint every line of a document.
pub fn hash_lines<'a>(lines: &[&'a str]) -> Vec<HashedLine<'a>> {
    lines.iter().map(|line| HashedLine::new(line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_has_no_lines() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn split_on_newline_only() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("single"), vec!["single"]);
    }

    #[test]
    fn trailing_newline_yields_empty_final_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn crlf_is_not_normalized() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(hash_line("hello"), hash_line("hello"));
        assert_ne!(hash_line("hello"), hash_line("world"));
        assert_eq!(hash_line(""), 0);
    }

    #[test]
    fn hashed_line_equality_requires_matching_text() {
        let a = HashedLine::new("same");
        let b = HashedLine::new("same");
        let c = HashedLine::new("other");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
