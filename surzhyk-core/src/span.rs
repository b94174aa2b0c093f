//! Labeled spans, sentence ranges, and tokens
//!
//! All offsets in this crate are byte offsets into UTF-8 text. Spans
//! use half-open `[start, end)` intervals for slicing; the overlap
//! test used for excuse decisions is inclusive at both ends, so
//! touching intervals count as overlapping.

/// A labeled character interval produced by a span detector
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// The covered text
    pub text: String,
    /// Detector-assigned label, e.g. "URL" or "PER"
    pub label: String,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize, text: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            label: label.into(),
        }
    }

    /// Shift the span by `offset`, turning sentence-relative offsets
    /// into absolute ones
    pub fn rebase(mut self, offset: usize) -> Self {
        self.start += offset;
        self.end += offset;
        self
    }

    /// Inclusive-bound overlap test against another interval
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        intervals_overlap((self.start, self.end), (start, end))
    }

    /// Whether the byte at `pos` lies inside the span (half-open)
    pub fn covers(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

/// Absolute byte range of one sentence within a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentenceRange {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl SentenceRange {
    /// Create a new sentence range
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether the token lies entirely within this sentence
    pub fn contains_token(&self, token: &Token) -> bool {
        token.start >= self.start && token.end <= self.end
    }

    /// Inclusive-bound overlap test against another interval
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        intervals_overlap((self.start, self.end), (start, end))
    }
}

/// A token with absolute byte offsets, the finest unit of the metric
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// The token text
    pub text: String,
}

impl Token {
    /// Create a new token
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Inclusive-bound interval overlap: touching counts as overlapping
///
/// This is the excuse test used throughout the metric: a foreign run
/// is excused when its interval overlaps an accepted span under this
/// definition. Symmetric by construction.
pub fn intervals_overlap(a: (usize, usize), b: (usize, usize)) -> bool {
    !(a.1 < b.0 || a.0 > b.1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_basic() {
        assert!(intervals_overlap((0, 5), (3, 8)));
        assert!(intervals_overlap((3, 8), (0, 5)));
        assert!(!intervals_overlap((0, 2), (4, 8)));
    }

    #[test]
    fn test_overlap_touching_counts() {
        // Inclusive bounds: [0,5] and [5,9] share the point 5
        assert!(intervals_overlap((0, 5), (5, 9)));
        assert!(intervals_overlap((5, 9), (0, 5)));
    }

    #[test]
    fn test_span_rebase() {
        let span = Span::new(2, 6, "test", "URL");
        let rebased = span.rebase(10);
        assert_eq!(rebased.start, 12);
        assert_eq!(rebased.end, 16);
        assert_eq!(rebased.text, "test");
    }

    #[test]
    fn test_sentence_contains_token() {
        let sentence = SentenceRange::new(10, 30);
        assert!(sentence.contains_token(&Token::new(10, 15, "hello")));
        assert!(sentence.contains_token(&Token::new(25, 30, "world")));
        assert!(!sentence.contains_token(&Token::new(8, 15, "out")));
        assert!(!sentence.contains_token(&Token::new(25, 31, "out")));
    }

    #[test]
    fn test_span_covers_is_half_open() {
        let span = Span::new(3, 7, "abcd", "");
        assert!(!span.covers(2));
        assert!(span.covers(3));
        assert!(span.covers(6));
        assert!(!span.covers(7));
    }
}
