//! Sentence-level language gate
//!
//! A coarse, whole-sentence excuse applied before any per-token
//! decision. A sentence conforms when it shows at least one native
//! character, or when everything that is not whitespace lies under an
//! accepted span (e.g. a sentence that is purely a URL).

use std::sync::Arc;
use surzhyk_core::{Alphabet, SentenceRange, Span};

/// Decides whether a whole sentence is in the required language
#[derive(Debug, Clone)]
pub struct SentenceGate {
    alphabet: Arc<Alphabet>,
}

impl SentenceGate {
    /// Create a gate for the given alphabet
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        Self { alphabet }
    }

    /// Whether the sentence conforms to the native language
    ///
    /// `merged` holds the merged accepted spans of this sentence in
    /// absolute offsets. Native-character presence is the cheap
    /// necessary condition; full span coverage is the fallback for
    /// sentences with no native characters at all.
    pub fn language_ok(&self, sentence: &str, range: &SentenceRange, merged: &[Span]) -> bool {
        if self.alphabet.has_native_char(sentence) {
            return true;
        }

        // Blank out covered bytes; conforming iff only whitespace remains
        sentence.char_indices().all(|(rel, ch)| {
            let abs = range.start + rel;
            ch.is_whitespace() || merged.iter().any(|span| span.covers(abs))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(alphabet: Alphabet) -> SentenceGate {
        SentenceGate::new(Arc::new(alphabet))
    }

    #[test]
    fn test_native_character_suffices() {
        let g = gate(Alphabet::ukrainian());
        let range = SentenceRange::new(0, 22);
        // One native word among foreign content passes the gate
        assert!(g.language_ok("це is mostly English", &range, &[]));
    }

    #[test]
    fn test_foreign_sentence_fails_without_spans() {
        let g = gate(Alphabet::ukrainian());
        let range = SentenceRange::new(0, 11);
        assert!(!g.language_ok("hello world", &range, &[]));
    }

    #[test]
    fn test_fully_covered_sentence_passes() {
        let g = gate(Alphabet::ukrainian());
        let url = "https://example.com";
        let range = SentenceRange::new(0, url.len());
        let merged = vec![Span::new(0, url.len(), url, "")];
        assert!(g.language_ok(url, &range, &merged));
    }

    #[test]
    fn test_partial_coverage_fails() {
        let g = gate(Alphabet::ukrainian());
        let text = "see https://example.com";
        let range = SentenceRange::new(0, text.len());
        // Only the URL is covered; "see" remains foreign
        let merged = vec![Span::new(4, text.len(), &text[4..], "")];
        assert!(!g.language_ok(text, &range, &merged));
    }

    #[test]
    fn test_coverage_respects_absolute_offsets() {
        let g = gate(Alphabet::ukrainian());
        // Sentence starts at absolute offset 50
        let text = "https://example.com";
        let range = SentenceRange::new(50, 50 + text.len());
        let merged = vec![Span::new(50, 50 + text.len(), text, "")];
        assert!(g.language_ok(text, &range, &merged));
        // The same span left at sentence-relative offsets misses
        let unrebased = vec![Span::new(0, text.len(), text, "")];
        assert!(!g.language_ok(text, &range, &unrebased));
    }

    #[test]
    fn test_whitespace_only_sentence_passes() {
        let g = gate(Alphabet::ukrainian());
        let range = SentenceRange::new(0, 3);
        assert!(g.language_ok("   ", &range, &[]));
    }
}
