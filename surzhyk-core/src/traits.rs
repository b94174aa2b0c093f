//! Collaborator traits
//!
//! Everything that actually produces spans or segmentations is a
//! pluggable collaborator behind one of these traits. Implementations
//! must be safe for concurrent read-only use: the engine may invoke
//! them from several worker threads at once. A collaborator wrapping
//! a model that cannot serve concurrent inference must serialize
//! access internally (e.g. behind a mutex or a dedicated worker).

use crate::error::CoreError;
use crate::span::{SentenceRange, Span, Token};

/// Sentence and token decomposition of one text
///
/// All offsets are absolute byte offsets into the source text.
/// Sentences are non-overlapping and ordered by start; gaps between
/// ranges are legal and represent inter-sentence material not
/// assigned to any sentence.
#[derive(Debug, Clone, Default)]
pub struct Segmentation {
    /// Sentence texts, in order
    pub sentences: Vec<String>,
    /// Absolute range of each sentence, same order as `sentences`
    pub ranges: Vec<SentenceRange>,
    /// All tokens of the text, ordered by start
    pub tokens: Vec<Token>,
}

impl Segmentation {
    /// Whether the segmentation holds no sentences and no tokens
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty() && self.tokens.is_empty()
    }
}

/// A source of entity or whitelist spans
///
/// Given the sentence/token context of one text, a detector returns
/// one span list per sentence, in sentence order. Returned offsets
/// are sentence-relative; the engine re-bases them to absolute
/// offsets using the sentence ranges. Returning a list whose length
/// differs from the sentence count, or spans outside their sentence,
/// is a contract violation and drops the detector's contribution for
/// that text.
pub trait SpanDetector: Send + Sync {
    /// Short identifier used in diagnostics, e.g. "url" or "wordlist"
    fn name(&self) -> &str;

    /// Detect spans for every sentence of one text
    fn detect(
        &self,
        sentences: &[String],
        ranges: &[SentenceRange],
        tokens: &[Token],
    ) -> Result<Vec<Vec<Span>>, CoreError>;
}

/// Decomposes raw text into sentences and tokens
pub trait SentenceSplitter: Send + Sync {
    /// Split `text` into an ordered segmentation with absolute offsets
    fn split(&self, text: &str) -> Result<Segmentation, CoreError>;
}

/// Text normalization applied once before splitting
///
/// An empty result excludes the text from every corpus counter.
pub trait Preprocessor: Send + Sync {
    /// Normalize `text` (e.g. strip HTML markup)
    fn normalize(&self, text: &str) -> String;
}
