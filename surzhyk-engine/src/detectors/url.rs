//! URL span detector

use regex::Regex;
use surzhyk_core::{CoreError, SentenceRange, Span, SpanDetector, Token};

const URL_PATTERN: &str = r"https?://(?:[-\w.]|(?:%[\da-fA-F]{2}))+";

/// Finds http/https URLs and reports them as excusing spans
#[derive(Debug)]
pub struct UrlDetector {
    pattern: Regex,
}

impl UrlDetector {
    /// Create a URL detector
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(URL_PATTERN).expect("built-in URL pattern is valid"),
        }
    }
}

impl Default for UrlDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpanDetector for UrlDetector {
    fn name(&self) -> &str {
        "url"
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
                    .map(|m| Span::new(m.start(), m.end(), m.as_str(), "URL"))
                    .collect()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(sentence: &str) -> Vec<Span> {
        let detector = UrlDetector::new();
        let mut lists = detector
            .detect(&[sentence.to_string()], &[], &[])
            .unwrap();
        lists.remove(0)
    }

    #[test]
    fn test_finds_url_with_offsets() {
        let spans = detect("дивись https://example.com/page тут");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "https://example.com/page");
        assert_eq!(spans[0].label, "URL");
        assert_eq!(spans[0].start, "дивись ".len());
    }

    #[test]
    fn test_no_url_yields_empty_list() {
        assert!(detect("просто речення").is_empty());
    }

    #[test]
    fn test_http_and_percent_escapes() {
        let spans = detect("http://x.ua/%D0%BA ok");
        assert_eq!(spans[0].text, "http://x.ua/%D0%BA");
    }

    #[test]
    fn test_one_list_per_sentence() {
        let detector = UrlDetector::new();
        let sentences = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let lists = detector.detect(&sentences, &[], &[]).unwrap();
        assert_eq!(lists.len(), 3);
    }
}
