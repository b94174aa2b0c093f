//! Metric processor and builder
//!
//! The public entry point of the engine. Collaborators are injected
//! pre-built and shared read-only across every `calculate` call, so
//! a processor can score any number of batches without rebuilding
//! its detectors or splitter.

use std::sync::Arc;

use log::debug;
use surzhyk_core::{Alphabet, Preprocessor, SentenceSplitter, SpanDetector};

use crate::aggregator::CorpusReport;
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::executor::{self, ExecutionMode};
use crate::pipeline::Pipeline;
use crate::preprocess::HtmlStripper;
use crate::split::RuleSplitter;

/// Computes the code-switching metric over batches of texts
pub struct CodeSwitchProcessor {
    pipeline: Pipeline,
    config: EngineConfig,
}

impl CodeSwitchProcessor {
    /// Create a processor with default collaborators and configuration
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start building a processor
    pub fn builder() -> CodeSwitchProcessorBuilder {
        CodeSwitchProcessorBuilder::new()
    }

    /// Compute the metric for a batch of texts
    ///
    /// Every intermediate value is created fresh for this call and
    /// discarded at its end; only the injected collaborators persist.
    /// Report order effects are none: per-text results fold in input
    /// order regardless of execution strategy.
    pub fn calculate<S: AsRef<str>>(&self, texts: &[S]) -> CorpusReport {
        debug!("scoring batch of {} texts", texts.len());
        let refs: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
        let reports = executor::run_batch(&self.config, &self.pipeline, &refs);
        CorpusReport::from_reports(reports)
    }

    /// The configuration this processor was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// Fluent builder for [`CodeSwitchProcessor`]
pub struct CodeSwitchProcessorBuilder {
    alphabet: Alphabet,
    preprocessor: Option<Arc<dyn Preprocessor>>,
    splitter: Option<Arc<dyn SentenceSplitter>>,
    detectors: Vec<Arc<dyn SpanDetector>>,
    execution_mode: ExecutionMode,
    threads: Option<usize>,
    parallel_threshold: usize,
}

impl Default for CodeSwitchProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeSwitchProcessorBuilder {
    /// Create a builder with default settings
    pub fn new() -> Self {
        let defaults = EngineConfig::default();
        Self {
            alphabet: defaults.alphabet,
            preprocessor: None,
            splitter: None,
            detectors: Vec::new(),
            execution_mode: defaults.execution_mode,
            threads: defaults.threads,
            parallel_threshold: defaults.parallel_threshold,
        }
    }

    /// Set the native alphabet
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    /// Set the preprocessor (default: [`HtmlStripper`])
    pub fn preprocessor(mut self, preprocessor: Arc<dyn Preprocessor>) -> Self {
        self.preprocessor = Some(preprocessor);
        self
    }

    /// Set the sentence splitter (default: [`RuleSplitter`])
    pub fn splitter(mut self, splitter: Arc<dyn SentenceSplitter>) -> Self {
        self.splitter = Some(splitter);
        self
    }

    /// Add one span detector
    pub fn detector(mut self, detector: Arc<dyn SpanDetector>) -> Self {
        self.detectors.push(detector);
        self
    }

    /// Add several span detectors
    pub fn detectors(mut self, detectors: impl IntoIterator<Item = Arc<dyn SpanDetector>>) -> Self {
        self.detectors.extend(detectors);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    /// Set the worker thread count (None = rayon default)
    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Set the adaptive batch-size threshold
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Build the processor
    pub fn build(self) -> Result<CodeSwitchProcessor> {
        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(EngineError::Config(
                "parallel threshold must be at least 1".to_string(),
            ));
        }

        let config = EngineConfig {
            alphabet: self.alphabet.clone(),
            execution_mode: self.execution_mode,
            threads: self.threads,
            parallel_threshold: self.parallel_threshold,
        };

        let pipeline = Pipeline::new(
            Arc::new(self.alphabet),
            self.preprocessor
                .unwrap_or_else(|| Arc::new(HtmlStripper::new())),
            self.splitter
                .unwrap_or_else(|| Arc::new(RuleSplitter::default())),
            self.detectors,
        );

        Ok(CodeSwitchProcessor { pipeline, config })
    }
}
