//! Corpus aggregation
//!
//! Per-text results fold into an immutable counter value; ratios are
//! derived once at the end. A zero denominator yields the explicit
//! sentinel `-1.0`, never a division error.

use crate::classifier::BrokenToken;

/// Sentinel ratio for "no data"
pub const NO_DATA: f64 = -1.0;

/// Running corpus totals
///
/// Folded, never mutated in place across texts: each text produces
/// its own counters and `merge` combines them, which keeps the
/// aggregation referentially transparent and order-insensitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusCounters {
    /// Texts that survived preprocessing
    pub texts: usize,
    /// Sentences across all counted texts
    pub sentences: usize,
    /// Tokens across all counted texts
    pub tokens: usize,
    /// Texts with at least one broken token
    pub broken_texts: usize,
    /// Sentences overlapping at least one broken token
    pub broken_sentences: usize,
    /// Broken tokens
    pub broken_tokens: usize,
}

impl CorpusCounters {
    /// Combine two counter values
    pub fn merge(self, other: Self) -> Self {
        Self {
            texts: self.texts + other.texts,
            sentences: self.sentences + other.sentences,
            tokens: self.tokens + other.tokens,
            broken_texts: self.broken_texts + other.broken_texts,
            broken_sentences: self.broken_sentences + other.broken_sentences,
            broken_tokens: self.broken_tokens + other.broken_tokens,
        }
    }
}

/// Result of scoring one text
#[derive(Debug, Clone, Default)]
pub struct TextReport {
    /// Position of the text in the input batch
    pub text_index: usize,
    /// This text's contribution to the corpus counters
    pub counters: CorpusCounters,
    /// Broken tokens of this text, in order
    pub broken_tokens: Vec<BrokenToken>,
    /// Per-text diagnostics (detector contract violations, splitter failures)
    pub diagnostics: Vec<String>,
}

impl TextReport {
    /// A text excluded from all counters (empty after preprocessing)
    pub fn skipped(text_index: usize) -> Self {
        Self {
            text_index,
            ..Self::default()
        }
    }
}

/// A broken token attributed to its source text
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BrokenTokenRecord {
    /// Position of the source text in the input batch
    pub text_index: usize,
    /// The broken token
    #[serde(flatten)]
    pub token: BrokenToken,
}

/// Corpus-level metric report
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CorpusReport {
    /// Broken-sentence ratio, or -1.0 when no sentences were counted
    pub codeswitch_sentences_ratio: f64,
    /// Broken-text ratio, or -1.0 when no texts were counted
    pub codeswitch_texts_ratio: f64,
    /// Broken-token ratio, or -1.0 when no tokens were counted
    pub codeswitch_words_ratio: f64,
    /// Texts counted (texts that survived preprocessing)
    pub total_num_texts: usize,
    /// Sentences counted
    pub total_num_sentences: usize,
    /// Tokens counted
    pub total_num_tokens: usize,
    /// Broken texts
    pub num_broken_texts: usize,
    /// Broken sentences
    pub num_broken_sentences: usize,
    /// Broken tokens
    pub num_broken_tokens: usize,
    /// Broken tokens with text attribution, in batch order
    pub broken_tokens: Vec<BrokenTokenRecord>,
    /// Per-text diagnostics accumulated during the run
    pub diagnostics: Vec<String>,
}

impl CorpusReport {
    /// Fold per-text reports into the corpus report
    ///
    /// `reports` must be in batch order; the parallel executor
    /// guarantees this even when texts were scored out of order.
    pub fn from_reports(reports: Vec<TextReport>) -> Self {
        let mut counters = CorpusCounters::default();
        let mut broken_tokens = Vec::new();
        let mut diagnostics = Vec::new();

        for report in reports {
            let text_index = report.text_index;
            counters = counters.merge(report.counters);
            broken_tokens.extend(
                report
                    .broken_tokens
                    .into_iter()
                    .map(|token| BrokenTokenRecord { text_index, token }),
            );
            diagnostics.extend(report.diagnostics);
        }

        debug_assert!(counters.broken_texts <= counters.texts);
        debug_assert!(counters.broken_sentences <= counters.sentences);
        debug_assert!(counters.broken_tokens <= counters.tokens);

        let report = Self {
            codeswitch_sentences_ratio: ratio(counters.broken_sentences, counters.sentences),
            codeswitch_texts_ratio: ratio(counters.broken_texts, counters.texts),
            codeswitch_words_ratio: ratio(counters.broken_tokens, counters.tokens),
            total_num_texts: counters.texts,
            total_num_sentences: counters.sentences,
            total_num_tokens: counters.tokens,
            num_broken_texts: counters.broken_texts,
            num_broken_sentences: counters.broken_sentences,
            num_broken_tokens: counters.broken_tokens,
            broken_tokens,
            diagnostics,
        };

        debug_assert!(report.ratios_in_range());
        report
    }

    fn ratios_in_range(&self) -> bool {
        [
            self.codeswitch_sentences_ratio,
            self.codeswitch_texts_ratio,
            self.codeswitch_words_ratio,
        ]
        .iter()
        .all(|&r| r == NO_DATA || (0.0..=1.0).contains(&r))
    }
}

fn ratio(broken: usize, total: usize) -> f64 {
    if total == 0 {
        NO_DATA
    } else {
        broken as f64 / total as f64
    }
}
