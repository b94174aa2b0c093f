//! Rule-based sentence splitter
//!
//! A deliberately simple built-in [`SentenceSplitter`]: a sentence
//! ends at a terminator character followed by whitespace (or end of
//! text); tokens are maximal non-whitespace runs. Statistical
//! splitters plug in through the same trait when better boundaries
//! are needed.

use surzhyk_core::{CoreError, Segmentation, SentenceRange, SentenceSplitter, Token};

/// Terminator-and-whitespace sentence splitter with whitespace
/// tokenization
#[derive(Debug, Clone)]
pub struct RuleSplitter {
    terminators: Vec<char>,
}

impl RuleSplitter {
    /// Create a splitter with a custom terminator set
    pub fn new(terminators: impl IntoIterator<Item = char>) -> Self {
        Self {
            terminators: terminators.into_iter().collect(),
        }
    }
}

impl Default for RuleSplitter {
    fn default() -> Self {
        Self::new(['.', '!', '?', '…'])
    }
}

impl SentenceSplitter for RuleSplitter {
    fn split(&self, text: &str) -> Result<Segmentation, CoreError> {
        let mut ranges = Vec::new();
        let mut sentence_start: Option<usize> = None;

        let mut chars = text.char_indices().peekable();
        while let Some((idx, ch)) = chars.next() {
            if sentence_start.is_none() && !ch.is_whitespace() {
                sentence_start = Some(idx);
            }

            let Some(start) = sentence_start else {
                continue;
            };

            if self.terminators.contains(&ch) {
                // Close only on the last terminator of a run, so
                // "Що?!" stays one sentence
                let at_boundary = match chars.peek() {
                    None => true,
                    Some((_, next)) => next.is_whitespace(),
                };
                if at_boundary {
                    ranges.push(SentenceRange::new(start, idx + ch.len_utf8()));
                    sentence_start = None;
                }
            }
        }

        // Trailing material without a terminator forms a final sentence
        if let Some(start) = sentence_start {
            let end = start + text[start..].trim_end().len();
            if end > start {
                ranges.push(SentenceRange::new(start, end));
            }
        }

        let sentences = ranges
            .iter()
            .map(|r| text[r.start..r.end].to_string())
            .collect();

        let mut tokens = Vec::new();
        let mut token_start: Option<usize> = None;
        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = token_start.take() {
                    tokens.push(Token::new(start, idx, &text[start..idx]));
                }
            } else {
                token_start.get_or_insert(idx);
            }
        }
        if let Some(start) = token_start {
            tokens.push(Token::new(start, text.len(), &text[start..]));
        }

        Ok(Segmentation {
            sentences,
            ranges,
            tokens,
        })
    }
}
