//! Rack solving command
//!
//! Parses the rack, loads the word list, then runs the solver between the
//! header and the summary.

use crate::core::TileSequence;
use crate::output::{Console, print_header, print_summary};
use crate::solver::{CancelToken, ConfigError, SolveConfig, SolveError, SolveReport, Solver};
use crate::wordlists::{DictionaryError, load_dictionary};
use std::fmt;
use std::path::PathBuf;

/// Everything needed to solve one rack
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub input: String,
    pub wildcard: char,
    pub dictionary: PathBuf,
    pub config: SolveConfig,
    /// Draw the live status line
    pub show_status: bool,
}

/// Error type for the solve command
#[derive(Debug)]
pub enum CommandError {
    Config(ConfigError),
    Dictionary(DictionaryError),
    Solve(SolveError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => e.fmt(f),
            Self::Dictionary(e) => e.fmt(f),
            Self::Solve(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => e.source(),
            Self::Dictionary(e) => e.source(),
            Self::Solve(e) => e.source(),
        }
    }
}

impl From<ConfigError> for CommandError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DictionaryError> for CommandError {
    fn from(e: DictionaryError) -> Self {
        Self::Dictionary(e)
    }
}

impl From<SolveError> for CommandError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}

/// Solve `request.input`, streaming solutions to stdout
///
/// The rack is validated before the dictionary is read, so a bad input fails
/// without touching the filesystem.
///
/// # Errors
///
/// Returns an error if:
/// - The input contains characters other than letters and the wildcard
/// - The dictionary cannot be read or is empty
/// - The run is cancelled or the worker pool cannot start
pub fn solve_rack(
    request: &SolveRequest,
    cancel: &CancelToken,
) -> Result<SolveReport, CommandError> {
    let rack = TileSequence::parse(&request.input, request.wildcard).map_err(ConfigError::from)?;
    let dictionary = load_dictionary(&request.dictionary)?;

    print_header(&rack, &request.config);
    let console = Console::stdout(request.show_status);
    let report = Solver::new(&dictionary, request.config.clone()).solve(&rack, &console, cancel)?;
    print_summary(&report, &rack);

    Ok(report)
}
