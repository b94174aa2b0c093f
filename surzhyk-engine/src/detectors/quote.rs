//! Quoted-run span detector

use regex::Regex;
use surzhyk_core::{CoreError, SentenceRange, Span, SpanDetector, Token};

// One alternation per quote style; the regex crate has no
// backreferences, so mismatched opening/closing quotes never pair
const QUOTE_PATTERN: &str = "\"[^\"]*\"|'[^']*'|`[^`]*`|«[^»]*»|„[^“]*“";

/// Finds quoted runs and reports them as excusing spans
///
/// Quoted material is often deliberately foreign (titles, citations,
/// borrowed phrases), so it is whitelisted wholesale, delimiters
/// included.
#[derive(Debug)]
pub struct QuoteDetector {
    pattern: Regex,
}

impl QuoteDetector {
    /// Create a quote detector
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(QUOTE_PATTERN).expect("built-in quote pattern is valid"),
        }
    }
}

impl Default for QuoteDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanDetector for QuoteDetector {
    fn name(&self) -> &str {
        "quote"
    }

    fn detect(
        &self,
        sentences: &[String],
        _ranges: &[SentenceRange],
        _tokens: &[Token],
    ) -> Result<Vec<Vec<Span>>, CoreError> {
        Ok(sentences
            .iter()
            .map(|sentence| {
                self.pattern
                    .find_iter(sentence)
                    .map(|m| Span::new(m.start(), m.end(), m.as_str(), "Quote"))
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(sentence: &str) -> Vec<Span> {
        let detector = QuoteDetector::new();
        let mut lists = detector
            .detect(&[sentence.to_string()], &[], &[])
            .unwrap();
        lists.remove(0)
    }

    #[test]
    fn test_double_quotes() {
        let spans = detect(r#"він сказав "the best" і пішов"#);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "\"the best\"");
        assert_eq!(spans[0].label, "Quote");
    }

    #[test]
    fn test_guillemets() {
        let spans = detect("назва «Slavuta» відома");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "«Slavuta»");
    }

    #[test]
    fn test_unmatched_quote_is_ignored() {
        assert!(detect("це \"незакрита цитата").is_empty());
    }

    #[test]
    fn test_multiple_quotes_in_one_sentence() {
        let spans = detect("'a' та 'b'");
        assert_eq!(spans.len(), 2);
    }
}
