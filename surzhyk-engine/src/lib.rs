//! Orchestration for the surzhyk code-switching metric
//!
//! This crate wires the core primitives into the full scoring
//! pipeline: collaborator invocation, cross-detector span merging,
//! the sentence language gate, the broken-token classifier, corpus
//! aggregation, and the sequential/parallel execution strategies.

#![warn(missing_docs)]

pub mod aggregator;
pub mod classifier;
pub mod config;
pub mod detectors;
pub mod error;
pub mod executor;
pub mod gate;
pub mod pipeline;
pub mod preprocess;
pub mod processor;
pub mod split;

// Re-export key types
pub use aggregator::{BrokenTokenRecord, CorpusCounters, CorpusReport, TextReport};
pub use classifier::{BrokenToken, SentenceVerdict, TokenClassifier};
pub use config::EngineConfig;
pub use detectors::{QuoteDetector, UrlDetector, WordlistDetector};
pub use error::{EngineError, Result};
pub use executor::ExecutionMode;
pub use gate::SentenceGate;
pub use pipeline::Pipeline;
pub use preprocess::{HtmlStripper, NoopPreprocessor};
pub use processor::{CodeSwitchProcessor, CodeSwitchProcessorBuilder};
pub use split::RuleSplitter;

// Re-export from core for convenience
pub use surzhyk_core::{Alphabet, SentenceRange, Span, Token};
