//! Excuse behavior, detector plumbing, and execution strategies

use std::sync::Arc;

use surzhyk_engine::{
    Alphabet, CodeSwitchProcessor, ExecutionMode, QuoteDetector, Span, UrlDetector,
    WordlistDetector,
};
use surzhyk_core::{CoreError, SentenceRange, SpanDetector, Token};

fn builder() -> surzhyk_engine::CodeSwitchProcessorBuilder {
    CodeSwitchProcessor::builder().alphabet(Alphabet::ukrainian())
}

#[test]
fn quoted_foreign_phrase_is_excused() {
    let with_quotes = builder()
        .detector(Arc::new(QuoteDetector::new()))
        .build()
        .unwrap();
    let without = builder().build().unwrap();

    let text = r#"Він назвав це "the best" рішенням."#;
    assert_eq!(with_quotes.calculate(&[text]).num_broken_tokens, 0);
    assert_eq!(without.calculate(&[text]).num_broken_tokens, 2);
}

#[test]
fn url_only_sentence_passes_the_gate() {
    let processor = builder()
        .detector(Arc::new(UrlDetector::new()))
        .build()
        .unwrap();
    // No native character anywhere; the span coverage fallback applies
    let report = processor.calculate(&["https://example.com"]);
    assert_eq!(report.num_broken_tokens, 0);
    assert_eq!(report.codeswitch_sentences_ratio, 0.0);
}

#[test]
fn unexcused_url_sentence_fails_without_the_detector() {
    let processor = builder().build().unwrap();
    let report = processor.calculate(&["https://example.com/page"]);
    assert_eq!(report.num_broken_sentences, 1);
}

#[test]
fn wordlist_excuses_known_foreign_words() {
    let processor = builder()
        .detector(Arc::new(WordlistDetector::new(["Slavuta", "ZAZ"])))
        .build()
        .unwrap();
    let report = processor.calculate(&["Авто ZAZ Slavuta їде."]);
    assert_eq!(report.num_broken_tokens, 0);

    let bare = builder().build().unwrap();
    assert_eq!(bare.calculate(&["Авто ZAZ Slavuta їде."]).num_broken_tokens, 2);
}

#[test]
fn failed_gate_ignores_per_token_excuses() {
    // The sentence has no native characters and is only partially
    // covered, so it fails the gate; the wordlist excuse for "hello"
    // must not be consulted
    let processor = builder()
        .detector(Arc::new(WordlistDetector::new(["hello"])))
        .build()
        .unwrap();
    let report = processor.calculate(&["hello world"]);
    assert_eq!(report.num_broken_tokens, 2);
}

/// Detector that reports one list too few
struct ShortListDetector;

impl SpanDetector for ShortListDetector {
    fn name(&self) -> &str {
        "shortlist"
    }

    fn detect(
        &self,
        sentences: &[String],
        _ranges: &[SentenceRange],
        _tokens: &[Token],
    ) -> Result<Vec<Vec<Span>>, CoreError> {
        Ok(vec![Vec::new(); sentences.len().saturating_sub(1)])
    }
}

#[test]
fn contract_violation_is_reported_and_batch_continues() {
    let processor = builder().detector(Arc::new(ShortListDetector)).build().unwrap();
    let report = processor.calculate(&["Перший текст.", "Другий текст."]);
    // Both texts scored despite the malformed detector
    assert_eq!(report.total_num_texts, 2);
    assert_eq!(report.diagnostics.len(), 2);
    assert!(report.diagnostics[0].contains("shortlist"));
}

#[test]
fn parallel_and_sequential_agree() {
    let texts: Vec<String> = (0..40)
        .map(|i| {
            if i % 3 == 0 {
                format!("Текст номер {i} has some english інколи.")
            } else {
                format!("Чистий текст номер {i}.")
            }
        })
        .collect();

    let sequential = builder()
        .detector(Arc::new(UrlDetector::new()))
        .execution_mode(ExecutionMode::Sequential)
        .build()
        .unwrap();
    let parallel = builder()
        .detector(Arc::new(UrlDetector::new()))
        .execution_mode(ExecutionMode::Parallel)
        .threads(Some(4))
        .build()
        .unwrap();

    assert_eq!(sequential.calculate(&texts), parallel.calculate(&texts));
}

#[test]
fn parallel_results_keep_input_order() {
    let texts = vec!["один broken text.", "Чисто.", "ще inserted слово."];
    let processor = builder()
        .execution_mode(ExecutionMode::Parallel)
        .build()
        .unwrap();
    let report = processor.calculate(&texts);

    // Broken tokens are attributed to texts 0 and 2, in batch order
    let indices: Vec<usize> = report
        .broken_tokens
        .iter()
        .map(|record| record.text_index)
        .collect();
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(indices, sorted);
    assert!(indices.contains(&0));
    assert!(indices.contains(&2));
    assert!(!indices.contains(&1));
}
