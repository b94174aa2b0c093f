//! Core primitives for the surzhyk code-switching metric
//!
//! This crate holds the leaf algorithms and data types shared by every
//! layer of the metric pipeline: labeled character spans, sentence and
//! token ranges, interval merging, native-alphabet run detection, and
//! the collaborator traits that span detectors, sentence splitters,
//! and preprocessors implement. It has no orchestration logic and no
//! I/O concerns.

#![warn(missing_docs)]

pub mod alphabet;
pub mod error;
pub mod merge;
pub mod span;
pub mod traits;

// Re-export key types
pub use alphabet::Alphabet;
pub use error::CoreError;
pub use merge::{merge_intervals, merge_spans};
pub use span::{intervals_overlap, SentenceRange, Span, Token};
pub use traits::{Preprocessor, Segmentation, SentenceSplitter, SpanDetector};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
