//! Run configuration

use super::filter::MatchPattern;
use super::partition::DEFAULT_SPLIT_THRESHOLD;
use crate::core::TileError;
use crate::progress::ProgressConfig;
use std::fmt;
use std::num::NonZeroUsize;

/// Shortest word reported when no minimum is configured
pub const DEFAULT_MIN_CHARACTERS: usize = 6;

/// Marker for blank tiles when none is configured
pub const DEFAULT_WILDCARD: char = '*';

/// Error type for invalid run configuration
///
/// Raised while building the configuration, before any solving starts.
#[derive(Debug)]
pub enum ConfigError {
    InvalidPattern(regex::Error),
    InvalidTiles(TileError),
    ZeroThreads,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern(e) => write!(f, "Invalid match pattern: {e}"),
            Self::InvalidTiles(e) => write!(f, "Invalid input: {e}"),
            Self::ZeroThreads => write!(f, "Worker pool needs at least one thread"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern(e) => Some(e),
            Self::InvalidTiles(e) => Some(e),
            Self::ZeroThreads => None,
        }
    }
}

impl From<TileError> for ConfigError {
    fn from(e: TileError) -> Self {
        Self::InvalidTiles(e)
    }
}

/// Configuration for one solve
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Spread work units over a thread pool
    pub parallel: bool,
    /// Shortest accepted word
    pub min_characters: usize,
    /// Full-match filter on accepted words
    pub pattern: MatchPattern,
    /// Units with more free tiles than this are split (parallel mode only)
    pub split_threshold: usize,
    /// Pool size; `None` uses every available core
    pub threads: Option<NonZeroUsize>,
    /// Status display timing
    pub progress: ProgressConfig,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            min_characters: DEFAULT_MIN_CHARACTERS,
            pattern: MatchPattern::default(),
            split_threshold: DEFAULT_SPLIT_THRESHOLD,
            threads: None,
            progress: ProgressConfig::default(),
        }
    }
}

impl SolveConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn with_min_characters(mut self, min_characters: usize) -> Self {
        self.min_characters = min_characters;
        self
    }

    /// Replace the match pattern
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidPattern` if the expression does not compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.pattern = MatchPattern::new(pattern)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_split_threshold(mut self, split_threshold: usize) -> Self {
        self.split_threshold = split_threshold;
        self
    }

    /// Fix the worker pool size
    ///
    /// # Errors
    /// Returns `ConfigError::ZeroThreads` for a pool of zero workers.
    pub fn with_threads(mut self, threads: usize) -> Result<Self, ConfigError> {
        self.threads = Some(NonZeroUsize::new(threads).ok_or(ConfigError::ZeroThreads)?);
        Ok(self)
    }

    #[must_use]
    pub fn with_progress(mut self, progress: ProgressConfig) -> Self {
        self.progress = progress;
        self
    }

    /// Human-readable mode name
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        if self.parallel { "parallel" } else { "sequential" }
    }
}
