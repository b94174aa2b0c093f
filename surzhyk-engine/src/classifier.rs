//! Broken-token classification
//!
//! The finest-grained decision of the metric. A token is broken when
//! it carries foreign-alphabet content that nothing excuses: no
//! enclosing sentence, a sentence already judged off-language, or
//! foreign runs with no overlapping accepted span.

use std::sync::Arc;
use surzhyk_core::{Alphabet, SentenceRange, Span, Token};

/// Per-sentence verdict from the language gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceVerdict {
    /// Index of the sentence within its text
    pub sentence_index: usize,
    /// Whether the sentence passed the language gate
    pub language_ok: bool,
}

/// A token judged broken, with its text and absolute offsets
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BrokenToken {
    /// The token text
    pub text: String,
    /// Absolute start byte offset
    pub start: usize,
    /// Absolute end byte offset
    pub end: usize,
}

/// Walks tokens and applies the layered broken decision
#[derive(Debug, Clone)]
pub struct TokenClassifier {
    alphabet: Arc<Alphabet>,
}

impl TokenClassifier {
    /// Create a classifier for the given alphabet
    pub fn new(alphabet: Arc<Alphabet>) -> Self {
        Self { alphabet }
    }

    /// Classify all tokens of one text, returning the broken ones in order
    ///
    /// `merged` holds the merged accepted spans per sentence, absolute
    /// offsets, same order as `ranges` and `verdicts`.
    pub fn classify(
        &self,
        tokens: &[Token],
        ranges: &[SentenceRange],
        verdicts: &[SentenceVerdict],
        merged: &[Vec<Span>],
    ) -> Vec<BrokenToken> {
        tokens
            .iter()
            .filter(|token| self.is_broken(token, ranges, verdicts, merged))
            .map(|token| BrokenToken {
                text: token.text.clone(),
                start: token.start,
                end: token.end,
            })
            .collect()
    }

    fn is_broken(
        &self,
        token: &Token,
        ranges: &[SentenceRange],
        verdicts: &[SentenceVerdict],
        merged: &[Vec<Span>],
    ) -> bool {
        // Out-of-sentence content is always suspect
        let Some(idx) = ranges.iter().position(|r| r.contains_token(token)) else {
            return true;
        };

        // A sentence that failed the gate counts wholesale: per-token
        // excuses are not consulted for it
        if !verdicts[idx].language_ok {
            return true;
        }

        if self.alphabet.foreign_runs(&token.text).is_empty() {
            return false;
        }

        // Foreign content present: excused only by an overlapping
        // accepted span of the same sentence
        !merged[idx]
            .iter()
            .any(|span| span.overlaps(token.start, token.end))
    }
}
