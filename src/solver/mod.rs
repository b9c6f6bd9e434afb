//! Tile solving
//!
//! Blank expansion, subsequence and permutation enumeration, work partitioning
//! and the parallel engine that ties them together.

mod config;
mod engine;
mod expand;
mod filter;
mod partition;
mod permutation;
mod subsequence;

pub use config::{ConfigError, DEFAULT_MIN_CHARACTERS, DEFAULT_WILDCARD, SolveConfig};
pub use engine::{CancelToken, SolveError, SolveReport, Solver};
pub use expand::{WildcardExpansion, expand_wildcards, expansion_count};
pub use filter::{DEFAULT_PATTERN, MatchFilter, MatchPattern, SolutionSet};
pub use partition::{DEFAULT_SPLIT_THRESHOLD, WorkPartitioner, WorkUnit};
pub use permutation::{Visitor, permute};
pub use subsequence::for_each_subsequence;
