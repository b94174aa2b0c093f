//! Dictionary/whitelist span detector

use std::collections::HashSet;

use surzhyk_core::{CoreError, SentenceRange, Span, SpanDetector, Token};

/// Matches tokens against a fixed whitelist of known foreign words
///
/// Product names, brands, and loanwords that the corpus owner accepts
/// as in-language go here. Matching is case-insensitive and strips
/// leading/trailing non-alphanumeric characters from the token before
/// lookup, so `"Slavuta,"` still matches `slavuta`.
#[derive(Debug, Clone)]
pub struct WordlistDetector {
    words: HashSet<String>,
}

impl WordlistDetector {
    /// Build a detector from a word collection
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Number of whitelisted words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the whitelist is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    fn matches(&self, token_text: &str) -> bool {
        let trimmed = token_text.trim_matches(|ch: char| !ch.is_alphanumeric());
        !trimmed.is_empty() && self.words.contains(&trimmed.to_lowercase())
    }
}

impl SpanDetector for WordlistDetector {
    fn name(&self) -> &str {
        "wordlist"
    }

    fn detect(
        &self,
        sentences: &[String],
        ranges: &[SentenceRange],
        tokens: &[Token],
    ) -> Result<Vec<Vec<Span>>, CoreError> {
        let mut lists: Vec<Vec<Span>> = vec![Vec::new(); sentences.len()];

        for token in tokens {
            if !self.matches(&token.text) {
                continue;
            }
            // Attribute the match to its enclosing sentence, with
            // sentence-relative offsets per the detector contract
            if let Some(idx) = ranges.iter().position(|r| r.contains_token(token)) {
                let rel_start = token.start - ranges[idx].start;
                let rel_end = token.end - ranges[idx].start;
                lists[idx].push(Span::new(rel_start, rel_end, &token.text, "Wordlist"));
            }
        }

        Ok(lists)
    }
}
