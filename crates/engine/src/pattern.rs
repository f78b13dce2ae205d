//! Word pattern construction and matching.
//!
//! A word is a run of Unicode letters, apostrophes (`'` or `’`) and hyphens
//! starting at a word boundary, optionally introduced by a literal prefix.

use crate::config::TallyConfig;
use crate::error::Result;
use regex::Regex;
use std::fmt::Write;
use word_tally_core::word::letter_len;

/// Characters that may make up a word after the prefix.
const WORD_CLASS: &str = r"\p{L}'’\-";

/// Minimum number of class characters that must follow `prefix` so the
/// whole word reaches `min_length` letters.
///
/// Without a prefix at least one character is required, so a match is never
/// empty.
#[must_use]
pub fn effective_min_length(prefix: &str, min_length: usize) -> usize {
    if prefix.is_empty() {
        min_length.max(1)
    } else {
        min_length.saturating_sub(letter_len(prefix))
    }
}

/// Builds the regular expression source for the given options.
#[must_use]
pub fn build_pattern(prefix: &str, min_length: usize, ignore_case: bool) -> String {
    let mut pattern = String::from(r"\b");
    if !prefix.is_empty() {
        let literal = regex::escape(prefix);
        if ignore_case {
            let _ = write!(pattern, "(?i:{literal})");
        } else {
            pattern.push_str(&literal);
        }
    }
    let repeat = effective_min_length(prefix, min_length);
    let _ = write!(pattern, "[{WORD_CLASS}]{{{repeat},}}");
    pattern
}

/// Compiled word matcher.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    regex: Regex,
}

impl WordMatcher {
    /// Compiles the matcher for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::EngineError::Pattern`] when the derived
    /// expression cannot be compiled, e.g. when the minimum length is so
    /// large that the program exceeds the regex size limit.
    pub fn new(config: &TallyConfig) -> Result<Self> {
        let pattern = build_pattern(&config.prefix, config.min_length, config.ignore_case);
        log::debug!("word pattern: {pattern}");
        let regex = Regex::new(&pattern)?;
        Ok(Self { regex })
    }

    /// All non-overlapping words in `line`, left to right.
    pub fn words<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex.find_iter(line).map(|m| m.as_str())
    }
}
