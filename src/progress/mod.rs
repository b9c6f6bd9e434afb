//! Progress tracking
//!
//! A sharded counter fed by the workers, the precomputed goal, and the timer
//! thread that turns both into a status line.

mod counter;
mod goal;
mod tracker;

pub use counter::ProgressCounter;
pub use goal::permutation_goal;
pub use tracker::{Bounce, ProgressConfig, ProgressTracker};
