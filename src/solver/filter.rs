//! Candidate filtering and first-discovery deduplication
//!
//! A candidate is accepted when it is long enough, matches the pattern, is a
//! dictionary word, and no worker has accepted the same string before.

use super::config::ConfigError;
use crate::core::Dictionary;
use dashmap::DashSet;
use regex::bytes::Regex;
use rustc_hash::FxBuildHasher;
use std::fmt;

/// Pattern accepted when none is configured
pub const DEFAULT_PATTERN: &str = "[A-Z]+";

/// Full-match filter over uppercase candidates
#[derive(Debug, Clone)]
pub struct MatchPattern {
    source: String,
    regex: Regex,
}

impl MatchPattern {
    /// Compile a pattern that must match the whole candidate
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidPattern` if the expression does not compile.
    ///
    /// # Examples
    /// ```
    /// use tile_solver::solver::MatchPattern;
    ///
    /// let six = MatchPattern::new("[A-Z]{6}").unwrap();
    /// assert!(six.is_match(b"LISTEN"));
    /// assert!(!six.is_match(b"LINTS"));
    ///
    /// assert!(MatchPattern::new("[A-Z").is_err());
    /// ```
    pub fn new(source: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(&format!("^(?:{source})$"))
            .map_err(ConfigError::InvalidPattern)?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    #[inline]
    #[must_use]
    pub fn is_match(&self, candidate: &[u8]) -> bool {
        self.regex.is_match(candidate)
    }

    /// The expression as the user wrote it
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl Default for MatchPattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_PATTERN.to_string(),
            regex: Regex::new(&format!("^(?:{DEFAULT_PATTERN})$"))
                .expect("default pattern is valid"),
        }
    }
}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Concurrent set of accepted words for one run
#[derive(Debug, Default)]
pub struct SolutionSet {
    words: DashSet<Box<str>, FxBuildHasher>,
}

impl SolutionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `word` if absent; true only for the caller that inserted it
    pub fn insert(&self, word: &str) -> bool {
        // Cheap read first so repeat hits never allocate
        !self.words.contains(word) && self.words.insert(word.into())
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Consume the set into an alphabetically sorted list
    #[must_use]
    pub fn into_sorted(self) -> Vec<String> {
        let mut words: Vec<String> = self.words.into_iter().map(String::from).collect();
        words.sort_unstable();
        words
    }
}

/// Acceptance test shared by every worker of a run
pub struct MatchFilter<'a> {
    dictionary: &'a Dictionary,
    pattern: &'a MatchPattern,
    min_characters: usize,
    solutions: &'a SolutionSet,
}

impl<'a> MatchFilter<'a> {
    #[must_use]
    pub const fn new(
        dictionary: &'a Dictionary,
        pattern: &'a MatchPattern,
        min_characters: usize,
        solutions: &'a SolutionSet,
    ) -> Self {
        Self {
            dictionary,
            pattern,
            min_characters,
            solutions,
        }
    }

    /// Accept `candidate` if it qualifies and is seen here first
    ///
    /// Returns the accepted word so the caller can emit it. Every qualifying
    /// string is returned exactly once per run, whichever worker gets there first.
    pub fn accept<'c>(&self, candidate: &'c [u8]) -> Option<&'c str> {
        if candidate.len() < self.min_characters
            || !self.dictionary.contains(candidate)
            || !self.pattern.is_match(candidate)
        {
            return None;
        }

        let word = std::str::from_utf8(candidate).ok()?;
        self.solutions.insert(word).then_some(word)
    }
}
