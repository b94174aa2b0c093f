//! Core error types

use thiserror::Error;

/// Errors raised by core primitives and collaborator implementations
#[derive(Error, Debug)]
pub enum CoreError {
    /// An interval with start greater than end
    #[error("invalid interval: start {start} greater than end {end}")]
    InvalidInterval {
        /// Start offset of the offending interval
        start: usize,
        /// End offset of the offending interval
        end: usize,
    },

    /// A span whose offsets fall outside the text it was reported for
    #[error("span [{start}, {end}) out of bounds for text of length {len}")]
    SpanOutOfBounds {
        /// Start offset of the span
        start: usize,
        /// End offset of the span
        end: usize,
        /// Length of the text the span was reported against
        len: usize,
    },

    /// A span detector failed to produce output
    #[error("detector failure: {0}")]
    Detector(String),

    /// A sentence splitter failed to segment a text
    #[error("splitter failure: {0}")]
    Splitter(String),
}
