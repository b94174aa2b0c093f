//! Per-text scoring pipeline
//!
//! One text flows through: preprocess, split, detect (all detectors
//! against the same segmentation), validate and re-base, merge per
//! sentence, gate, classify tokens, count. Collaborator failures are
//! isolated to the offending text or detector and surface as
//! diagnostics; they never abort the batch.

use std::sync::Arc;

use log::{debug, warn};
use surzhyk_core::{
    merge_spans, Alphabet, CoreError, Preprocessor, Segmentation, SentenceSplitter, Span,
    SpanDetector,
};

use crate::aggregator::{CorpusCounters, TextReport};
use crate::classifier::{SentenceVerdict, TokenClassifier};
use crate::gate::SentenceGate;

/// Immutable scoring context shared by all worker threads
pub struct Pipeline {
    preprocessor: Arc<dyn Preprocessor>,
    splitter: Arc<dyn SentenceSplitter>,
    detectors: Vec<Arc<dyn SpanDetector>>,
    gate: SentenceGate,
    classifier: TokenClassifier,
}

impl Pipeline {
    /// Assemble a pipeline from pre-built collaborators
    pub fn new(
        alphabet: Arc<Alphabet>,
        preprocessor: Arc<dyn Preprocessor>,
        splitter: Arc<dyn SentenceSplitter>,
        detectors: Vec<Arc<dyn SpanDetector>>,
    ) -> Self {
        Self {
            preprocessor,
            splitter,
            detectors,
            gate: SentenceGate::new(Arc::clone(&alphabet)),
            classifier: TokenClassifier::new(alphabet),
        }
    }

    /// Score one text
    pub fn score_text(&self, text_index: usize, raw: &str) -> TextReport {
        let text = self.preprocessor.normalize(raw);
        if text.trim().is_empty() {
            debug!("text {text_index} empty after preprocessing, skipped");
            return TextReport::skipped(text_index);
        }

        let segmentation = match self.splitter.split(&text) {
            Ok(seg) => seg,
            Err(err) => {
                let diag = format!("text {text_index}: splitter failed: {err}");
                warn!("{diag}");
                return TextReport {
                    text_index,
                    diagnostics: vec![diag],
                    ..TextReport::default()
                };
            }
        };

        let mut diagnostics = Vec::new();
        let spans = self.collect_spans(text_index, &segmentation, &mut diagnostics);

        // Merge each sentence's concatenated detector output into one
        // coverage set; offsets are absolute, so the full text serves
        // as the slicing source
        let merged: Vec<Vec<Span>> = spans
            .iter()
            .map(|sentence_spans| merge_spans(&text, sentence_spans))
            .collect();

        let verdicts: Vec<SentenceVerdict> = segmentation
            .sentences
            .iter()
            .zip(&segmentation.ranges)
            .zip(&merged)
            .enumerate()
            .map(|(i, ((sentence, range), merged))| SentenceVerdict {
                sentence_index: i,
                language_ok: self.gate.language_ok(sentence, range, merged),
            })
            .collect();

        let broken_tokens = self.classifier.classify(
            &segmentation.tokens,
            &segmentation.ranges,
            &verdicts,
            &merged,
        );

        // A sentence is broken iff it overlaps at least one broken
        // token interval
        let broken_sentences = segmentation
            .ranges
            .iter()
            .filter(|range| {
                broken_tokens
                    .iter()
                    .any(|token| range.overlaps(token.start, token.end))
            })
            .count();

        let counters = CorpusCounters {
            texts: 1,
            sentences: segmentation.sentences.len(),
            tokens: segmentation.tokens.len(),
            broken_texts: usize::from(!broken_tokens.is_empty()),
            broken_sentences,
            broken_tokens: broken_tokens.len(),
        };

        TextReport {
            text_index,
            counters,
            broken_tokens,
            diagnostics,
        }
    }

    /// Run all detectors, validate their contracts, and re-base their
    /// spans to absolute offsets, concatenated per sentence
    ///
    /// A detector that errors, returns the wrong number of sentence
    /// lists, or reports spans outside their sentence loses its whole
    /// contribution for this text.
    fn collect_spans(
        &self,
        text_index: usize,
        segmentation: &Segmentation,
        diagnostics: &mut Vec<String>,
    ) -> Vec<Vec<Span>> {
        let mut per_sentence: Vec<Vec<Span>> = vec![Vec::new(); segmentation.sentences.len()];

        for detector in &self.detectors {
            match self.run_detector(detector.as_ref(), segmentation) {
                Ok(rebased) => {
                    for (sentence_spans, spans) in per_sentence.iter_mut().zip(rebased) {
                        sentence_spans.extend(spans);
                    }
                }
                Err(err) => {
                    let diag = format!(
                        "text {text_index}: detector '{}' dropped: {err}",
                        detector.name()
                    );
                    warn!("{diag}");
                    diagnostics.push(diag);
                }
            }
        }

        per_sentence
    }

    fn run_detector(
        &self,
        detector: &dyn SpanDetector,
        segmentation: &Segmentation,
    ) -> Result<Vec<Vec<Span>>, CoreError> {
        let lists = detector.detect(
            &segmentation.sentences,
            &segmentation.ranges,
            &segmentation.tokens,
        )?;

        if lists.len() != segmentation.sentences.len() {
            return Err(CoreError::Detector(format!(
                "returned {} sentence lists for {} sentences",
                lists.len(),
                segmentation.sentences.len()
            )));
        }

        let mut rebased = Vec::with_capacity(lists.len());
        for (i, spans) in lists.into_iter().enumerate() {
            let sentence_len = segmentation.sentences[i].len();
            let range = segmentation.ranges[i];

            let mut absolute = Vec::with_capacity(spans.len());
            for span in spans {
                if span.start > span.end {
                    return Err(CoreError::InvalidInterval {
                        start: span.start,
                        end: span.end,
                    });
                }
                if span.end > sentence_len {
                    return Err(CoreError::SpanOutOfBounds {
                        start: span.start,
                        end: span.end,
                        len: sentence_len,
                    });
                }
                absolute.push(span.rebase(range.start));
            }
            rebased.push(absolute);
        }

        Ok(rebased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::NoopPreprocessor;
    use crate::split::RuleSplitter;
    use surzhyk_core::SentenceRange;

    /// Detector returning a fixed sentence-relative span list
    struct FixedDetector {
        lists: Vec<Vec<Span>>,
    }

    impl SpanDetector for FixedDetector {
        fn name(&self) -> &str {
            "fixed"
        }

        fn detect(
            &self,
            _sentences: &[String],
            _ranges: &[SentenceRange],
            _tokens: &[surzhyk_core::Token],
        ) -> Result<Vec<Vec<Span>>, CoreError> {
            Ok(self.lists.clone())
        }
    }

    /// Detector that always errors
    struct FailingDetector;

    impl SpanDetector for FailingDetector {
        fn name(&self) -> &str {
            "failing"
        }

        fn detect(
            &self,
            _sentences: &[String],
            _ranges: &[SentenceRange],
            _tokens: &[surzhyk_core::Token],
        ) -> Result<Vec<Vec<Span>>, CoreError> {
            Err(CoreError::Detector("model unavailable".into()))
        }
    }

    fn pipeline(detectors: Vec<Arc<dyn SpanDetector>>) -> Pipeline {
        Pipeline::new(
            Arc::new(Alphabet::ukrainian()),
            Arc::new(NoopPreprocessor),
            Arc::new(RuleSplitter::default()),
            detectors,
        )
    }

    #[test]
    fn test_empty_text_is_skipped() {
        let p = pipeline(Vec::new());
        let report = p.score_text(3, "   ");
        assert_eq!(report.text_index, 3);
        assert_eq!(report.counters, CorpusCounters::default());
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_native_text_scores_clean() {
        let p = pipeline(Vec::new());
        let report = p.score_text(0, "Я не знаю, що робити");
        assert_eq!(report.counters.texts, 1);
        assert_eq!(report.counters.sentences, 1);
        assert_eq!(report.counters.tokens, 5);
        assert_eq!(report.counters.broken_tokens, 0);
        assert_eq!(report.counters.broken_texts, 0);
    }

    #[test]
    fn test_failing_detector_is_isolated() {
        let p = pipeline(vec![Arc::new(FailingDetector)]);
        let report = p.score_text(0, "Все нормально.");
        // Text still scored, failure recorded
        assert_eq!(report.counters.texts, 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].contains("failing"));
    }

    #[test]
    fn test_wrong_list_count_is_contract_violation() {
        let p = pipeline(vec![Arc::new(FixedDetector { lists: Vec::new() })]);
        let report = p.score_text(0, "Все нормально.");
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].contains("sentence lists"));
    }

    #[test]
    fn test_out_of_bounds_span_drops_detector() {
        let p = pipeline(vec![Arc::new(FixedDetector {
            lists: vec![vec![Span::new(0, 500, "", "X")]],
        })]);
        let report = p.score_text(0, "Все нормально.");
        assert_eq!(report.diagnostics.len(), 1);
        assert!(report.diagnostics[0].contains("out of bounds"));
        // The text itself still contributes to the counters
        assert_eq!(report.counters.texts, 1);
    }

    #[test]
    fn test_broken_sentence_counted_by_token_overlap() {
        let p = pipeline(Vec::new());
        // Two sentences, the second carries an un-excused Latin token
        let report = p.score_text(0, "Все нормально. Мабуть the кінець.");
        assert_eq!(report.counters.sentences, 2);
        assert_eq!(report.counters.broken_tokens, 1);
        assert_eq!(report.counters.broken_sentences, 1);
        assert_eq!(report.counters.broken_texts, 1);
        assert_eq!(report.broken_tokens[0].text, "the");
    }
}
