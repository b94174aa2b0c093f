//! Native-alphabet classification
//!
//! The metric is anchored on a configured set of characters that
//! count as "in-language". Anything alphabetic outside that set is a
//! code-switching candidate. Whitespace, punctuation, digits, and
//! characters that are not letters (combining marks, joiners, bidi
//! controls) never participate in a foreign run.

use std::collections::HashSet;

/// Ukrainian Cyrillic alphabet, upper and lower case
const UKRAINIAN: &str = "АаБбВвГгҐґДдЕеЄєЖжЗзИиІіЇїЙйКкЛлМмНнОоПпРрСсТтУуФфХхЦцЧчШшЩщьЮюЯя";

/// The configured set of native characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: HashSet<char>,
}

impl Alphabet {
    /// Build an alphabet from an explicit character collection
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Ukrainian Cyrillic, the alphabet the metric was first built for
    pub fn ukrainian() -> Self {
        Self::from_chars(UKRAINIAN.chars())
    }

    /// Basic Latin letters a-z and A-Z
    pub fn latin() -> Self {
        Self::from_chars(('a'..='z').chain('A'..='Z'))
    }

    /// Whether `ch` belongs to the native set
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Whether `ch` is a letter outside the native set
    pub fn is_foreign_letter(&self, ch: char) -> bool {
        ch.is_alphabetic() && !self.contains(ch)
    }

    /// Whether the text contains at least one native character
    pub fn has_native_char(&self, text: &str) -> bool {
        text.chars().any(|ch| self.contains(ch))
    }

    /// Find all maximal runs of foreign letters in `text`
    ///
    /// Returns `(start, end)` byte offsets within `text`, half-open.
    /// A run consists purely of consecutive foreign letters; any
    /// non-letter (whitespace, punctuation, digit, underscore,
    /// combining mark) terminates it. Empty or letter-free text
    /// yields no runs.
    pub fn foreign_runs(&self, text: &str) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut current: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            if self.is_foreign_letter(ch) {
                current.get_or_insert(idx);
            } else if let Some(start) = current.take() {
                runs.push((start, idx));
            }
        }
        if let Some(start) = current {
            runs.push((start, text.len()));
        }

        runs
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::ukrainian()
    }
}
