//! Built-in span detectors
//!
//! Lightweight, regex- and dictionary-based detectors that ship with
//! the engine. Heavy model-backed taggers live behind the same
//! [`surzhyk_core::SpanDetector`] trait but outside this crate; the
//! engine never depends on a concrete model.

mod quote;
mod url;
mod wordlist;

pub use quote::QuoteDetector;
pub use url::UrlDetector;
pub use wordlist::WordlistDetector;
