//! Command implementations

pub mod solve;

pub use solve::{CommandError, SolveRequest, solve_rack};
