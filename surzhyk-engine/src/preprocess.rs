//! Built-in preprocessors

use regex::Regex;
use surzhyk_core::Preprocessor;

const TAG_PATTERN: &str = "<[^<]+?>";

/// Removes HTML/XML tags before splitting
#[derive(Debug)]
pub struct HtmlStripper {
    tags: Regex,
}

impl HtmlStripper {
    /// Create an HTML-stripping preprocessor
    pub fn new() -> Self {
        Self {
            tags: Regex::new(TAG_PATTERN).expect("built-in tag pattern is valid"),
        }
    }
}

impl Default for HtmlStripper {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor for HtmlStripper {
    fn normalize(&self, text: &str) -> String {
        self.tags.replace_all(text, "").into_owned()
    }
}

/// Passes text through unchanged
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPreprocessor;

impl Preprocessor for NoopPreprocessor {
    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }
}
