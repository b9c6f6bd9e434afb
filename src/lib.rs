//! Tile Solver
//!
//! Finds every dictionary word that can be spelled from a rack of letter tiles,
//! where blank tiles stand for any letter. Each non-empty subsequence of the rack
//! is tried in every order, the search space is split into disjoint work units,
//! and the units run on a rayon pool with first-discovery deduplication.
//!
//! # Quick Start
//!
//! ```rust
//! use tile_solver::core::{Dictionary, TileSequence};
//! use tile_solver::output::Console;
//! use tile_solver::solver::{CancelToken, SolveConfig, Solver};
//!
//! let dictionary = Dictionary::from_words(["cat", "cut", "act"]);
//! let config = SolveConfig::new().with_min_characters(3);
//!
//! let rack = TileSequence::parse("C*T", '*').unwrap();
//! let report = Solver::new(&dictionary, config)
//!     .solve(&rack, &Console::silent(), &CancelToken::new())
//!     .unwrap();
//!
//! assert_eq!(report.solutions, vec!["ACT", "CAT", "CUT"]);
//! ```

// Core domain types
pub mod core;

// Search and parallel engine
pub mod solver;

// Shared counter and status display
pub mod progress;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
